pub mod approve_comment;
pub mod approve_post;
pub mod ban_person;
pub mod delete_comment;
pub mod delete_post;
pub mod list_comments;
pub mod list_posts;
