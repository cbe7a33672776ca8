use lostpaws_db_schema::{
  enums::{ContentStatus, ReportableType},
  newtypes::{CommentId, PostId},
  source::{comment::Comment, moderator::Moderator, post::Post, report::Report},
  traits::Crud,
  utils::DbPool,
};
use lostpaws_db_views::structs::LocalPersonView;
use lostpaws_utils::error::{LostpawsErrorExt, LostpawsErrorType, LostpawsResult};
use tracing::info;

/// Number of distinct outstanding reports at which content is automatically queued for
/// moderation.
pub const REPORTS_TO_QUEUE_FOR_MODERATION: i64 = 15;

/// A report target resolved to the content row behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTarget {
  Post(Post),
  Comment(Comment),
}

impl ReportTarget {
  pub fn id(&self) -> i32 {
    match self {
      ReportTarget::Post(p) => p.id.0,
      ReportTarget::Comment(c) => c.id.0,
    }
  }

  pub fn kind(&self) -> ReportableType {
    match self {
      ReportTarget::Post(_) => ReportableType::Post,
      ReportTarget::Comment(_) => ReportableType::Comment,
    }
  }

  pub fn status(&self) -> ContentStatus {
    match self {
      ReportTarget::Post(p) => p.status,
      ReportTarget::Comment(c) => c.status,
    }
  }
}

/// Fetches the content row behind a (kind, id) pair. A missing row surfaces uniformly as
/// target-not-found, whatever the kind.
#[tracing::instrument(skip_all)]
pub async fn resolve_reportable(
  pool: &mut DbPool<'_>,
  kind: ReportableType,
  id: i32,
) -> LostpawsResult<ReportTarget> {
  match kind {
    ReportableType::Post => Post::read(pool, PostId(id)).await.map(ReportTarget::Post),
    ReportableType::Comment => Comment::read(pool, CommentId(id))
      .await
      .map(ReportTarget::Comment),
  }
  .with_lostpaws_type(LostpawsErrorType::TargetNotFound)
}

/// Gate in front of every moderation mutation. The moderator row existing for the person is the
/// authorization.
#[tracing::instrument(skip_all)]
pub async fn is_moderator(
  pool: &mut DbPool<'_>,
  local_person_view: &LocalPersonView,
) -> LostpawsResult<Moderator> {
  Moderator::read_for_person(pool, local_person_view.person.id)
    .await
    .with_lostpaws_type(LostpawsErrorType::NotAModerator)
}

pub fn check_person_valid(local_person_view: &LocalPersonView) -> LostpawsResult<()> {
  if local_person_view.banned {
    Err(LostpawsErrorType::SiteBan)?
  }
  Ok(())
}

/// Queues the target for moderation once its outstanding report count reaches the threshold.
/// The transition is a single conditional update: concurrent reporters may all observe a count
/// past the threshold, but only the caller whose update flips the row owns the escalation.
/// Returns whether this call performed it.
#[tracing::instrument(skip_all)]
pub async fn maybe_escalate(pool: &mut DbPool<'_>, target: &ReportTarget) -> LostpawsResult<bool> {
  let count = Report::active_count(pool, target.id(), target.kind()).await?;
  if count < REPORTS_TO_QUEUE_FOR_MODERATION {
    return Ok(false);
  }

  let flipped = match target {
    ReportTarget::Post(post) => {
      Post::update_status_from(
        pool,
        post.id,
        ContentStatus::Published,
        ContentStatus::OnModeration,
      )
      .await?
    }
    ReportTarget::Comment(comment) => {
      Comment::update_status_from(
        pool,
        comment.id,
        ContentStatus::Published,
        ContentStatus::OnModeration,
      )
      .await?
    }
  };

  if flipped > 0 {
    info!(
      "Queued {} {} for moderation after {count} reports",
      target.kind(),
      target.id()
    );
  }
  Ok(flipped > 0)
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use super::*;
  use lostpaws_db_schema::{
    enums::{PostKind, ReportReason},
    source::{
      moderator::ModeratorForm,
      person::{Person, PersonInsertForm},
      post::PostInsertForm,
      report::ReportForm,
    },
    utils::build_db_pool_for_tests,
  };
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_escalation_threshold() -> LostpawsResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let author = Person::create(pool, &PersonInsertForm::test_form("esc_author")).await?;
    let inserted_post = Post::create(
      pool,
      &PostInsertForm::new("Adopt 500 hamsters".into(), author.id, PostKind::Adoption),
    )
    .await?;
    let target = resolve_reportable(pool, ReportableType::Post, inserted_post.id.0).await?;

    let mut reporters = Vec::new();
    for n in 0..REPORTS_TO_QUEUE_FOR_MODERATION {
      let reporter =
        Person::create(pool, &PersonInsertForm::test_form(&format!("esc_reporter_{n}"))).await?;
      Report::report(
        pool,
        &ReportForm::new(
          reporter.id,
          inserted_post.id.0,
          ReportableType::Post,
          ReportReason::Spam,
        ),
      )
      .await?;
      reporters.push(reporter);

      let escalated = maybe_escalate(pool, &target).await?;
      let expected = n + 1 == REPORTS_TO_QUEUE_FOR_MODERATION;
      assert_eq!(expected, escalated);
    }
    assert_eq!(
      ContentStatus::OnModeration,
      Post::read(pool, inserted_post.id).await?.status
    );

    // firing again against an already queued target changes nothing and is not an error
    assert!(!maybe_escalate(pool, &target).await?);
    assert_eq!(
      ContentStatus::OnModeration,
      Post::read(pool, inserted_post.id).await?.status
    );

    Post::delete(pool, inserted_post.id).await?;
    for reporter in reporters {
      Person::delete(pool, reporter.id).await?;
    }
    Person::delete(pool, author.id).await?;

    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_resolver_and_moderator_gate() -> LostpawsResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let person = Person::create(pool, &PersonInsertForm::test_form("gate_person")).await?;
    let view = LocalPersonView {
      person: person.clone(),
      banned: false,
    };

    // no moderator row, no access
    let gate = is_moderator(pool, &view).await;
    assert_eq!(
      LostpawsErrorType::NotAModerator,
      gate.unwrap_err().error_type
    );

    let inserted_moderator = Moderator::create(pool, &ModeratorForm::new(person.id)).await?;
    assert_eq!(inserted_moderator.id, is_moderator(pool, &view).await?.id);

    // missing rows resolve uniformly, whatever the kind
    let missing_post = resolve_reportable(pool, ReportableType::Post, -1).await;
    assert_eq!(
      LostpawsErrorType::TargetNotFound,
      missing_post.unwrap_err().error_type
    );
    let missing_comment = resolve_reportable(pool, ReportableType::Comment, -1).await;
    assert_eq!(
      LostpawsErrorType::TargetNotFound,
      missing_comment.unwrap_err().error_type
    );

    Moderator::delete(pool, inserted_moderator.id).await?;
    Person::delete(pool, person.id).await?;

    Ok(())
  }
}
