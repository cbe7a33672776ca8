use actix_web::web;
use lostpaws_api::{
  moderation::{
    approve_comment::approve_comment,
    approve_post::approve_post,
    ban_person::ban_person,
    delete_comment::delete_comment,
    delete_post::delete_post,
    list_comments::list_comments_for_moderation,
    list_posts::list_posts_for_moderation,
  },
  report::create::create_report,
};
use lostpaws_api_crud::{comment::create::create_comment, post::create::create_post};

pub fn config(cfg: &mut web::ServiceConfig) {
  cfg
    .service(web::resource("/reports").route(web::post().to(create_report)))
    .service(
      web::scope("/moderation")
        .route("/posts", web::get().to(list_posts_for_moderation))
        .route("/posts/{id}", web::patch().to(approve_post))
        .route("/posts/{id}", web::delete().to(delete_post))
        .route("/comments", web::get().to(list_comments_for_moderation))
        .route("/comments/{id}", web::patch().to(approve_comment))
        .route("/comments/{id}", web::delete().to(delete_comment))
        .route("/users/ban", web::post().to(ban_person)),
    )
    .service(web::resource("/posts").route(web::post().to(create_post)))
    .service(web::resource("/comments").route(web::post().to(create_comment)));
}
