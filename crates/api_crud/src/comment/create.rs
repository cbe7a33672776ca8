use actix_web::{
  web::{Data, Json},
  HttpResponse,
};
use lostpaws_api_common::{
  comment::{CommentResponse, CreateComment},
  context::LostpawsContext,
  utils::check_person_valid,
};
use lostpaws_db_schema::{
  enums::ContentStatus,
  source::{
    comment::{Comment, CommentInsertForm},
    post::Post,
  },
  traits::Crud,
  utils::DbPool,
};
use lostpaws_db_views::structs::LocalPersonView;
use lostpaws_utils::error::{LostpawsErrorExt, LostpawsErrorType, LostpawsResult};

#[tracing::instrument(skip_all)]
pub async fn create_comment(
  data: Json<CreateComment>,
  context: Data<LostpawsContext>,
  local_person_view: LocalPersonView,
) -> LostpawsResult<HttpResponse> {
  check_person_valid(&local_person_view)?;

  let post = Post::read(&mut context.pool(), data.post_id)
    .await
    .with_lostpaws_type(LostpawsErrorType::PostNotFound)?;
  if post.status == ContentStatus::Deleted {
    Err(LostpawsErrorType::PostNotFound)?
  }

  validate_thread(&mut context.pool(), &data).await?;

  let form = CommentInsertForm {
    parent_id: data.parent_id,
    reply_id: data.reply_id,
    ..CommentInsertForm::new(
      local_person_view.person.id,
      data.post_id,
      data.content.clone(),
    )
  };
  let comment = Comment::create(&mut context.pool(), &form)
    .await
    .with_lostpaws_type(LostpawsErrorType::CouldntCreateComment)?;

  Ok(HttpResponse::Created().json(CommentResponse { comment }))
}

/// Enforces the two-level thread shape before a comment is persisted: a declared parent must be a
/// root comment of the same post, and a reply target must be a member of the declared thread.
pub async fn validate_thread(pool: &mut DbPool<'_>, data: &CreateComment) -> LostpawsResult<()> {
  if let Some(parent_id) = data.parent_id {
    let parent = Comment::read(pool, parent_id)
      .await
      .with_lostpaws_type(LostpawsErrorType::ParentCommentNotFound)?;
    if parent.post_id != data.post_id {
      Err(LostpawsErrorType::ReplyToCommentOfAnotherPost)?
    }
    if parent.parent_id.is_some() {
      Err(LostpawsErrorType::InvalidCommentParentId)?
    }
  }

  if let Some(reply_id) = data.reply_id {
    // a reply must live inside a declared thread
    let Some(parent_id) = data.parent_id else {
      return Err(LostpawsErrorType::NullCommentParentId.into());
    };
    let reply = Comment::read(pool, reply_id)
      .await
      .with_lostpaws_type(LostpawsErrorType::ReplyCommentNotFound)?;
    if reply.post_id != data.post_id {
      Err(LostpawsErrorType::ReplyToCommentOfAnotherPost)?
    }
    if reply.parent_id != Some(parent_id) {
      Err(LostpawsErrorType::InvalidCommentReplyId)?
    }
  }

  Ok(())
}
