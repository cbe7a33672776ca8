use actix_web::{
  web::{Data, Json},
  HttpResponse,
};
use lostpaws_api_common::{
  context::LostpawsContext,
  report::CreateReport,
  utils::{check_person_valid, maybe_escalate, resolve_reportable},
  SuccessResponse,
};
use lostpaws_db_schema::{
  enums::ContentStatus,
  source::report::{Report, ReportForm},
};
use lostpaws_db_views::structs::LocalPersonView;
use lostpaws_utils::error::{LostpawsErrorType, LostpawsResult};
use tracing::debug;

/// Records a report and, once the target has collected enough of them, queues the target for
/// moderation. Repeating the call is safe: a duplicate report and a target already under
/// moderation both come back as plain success.
#[tracing::instrument(skip_all)]
pub async fn create_report(
  data: Json<CreateReport>,
  context: Data<LostpawsContext>,
  local_person_view: LocalPersonView,
) -> LostpawsResult<HttpResponse> {
  check_person_valid(&local_person_view)?;

  let target = resolve_reportable(&mut context.pool(), data.target_type, data.target_id).await?;

  // Content already in the queue accepts further reports without recording them, nothing more
  // can happen to it until a moderator decides.
  if target.status() == ContentStatus::OnModeration {
    return Ok(HttpResponse::Created().json(SuccessResponse::default()));
  }

  let report_form = ReportForm::new(
    local_person_view.person.id,
    target.id(),
    target.kind(),
    data.reason,
  );
  match Report::report(&mut context.pool(), &report_form).await {
    Ok(_) => {}
    Err(e) if e.error_type == LostpawsErrorType::DuplicateReport => {
      debug!(
        "Person {} repeated their report of {} {}",
        local_person_view.person.id,
        target.kind(),
        target.id()
      );
    }
    Err(e) => return Err(e),
  }

  // The escalation check runs on the duplicate path too: a caller that timed out between insert
  // and escalation can re-issue the call and the recount picks up where it left off.
  maybe_escalate(&mut context.pool(), &target).await?;

  Ok(HttpResponse::Created().json(SuccessResponse::default()))
}
