use crate::{
  enums::{ReportReason, ReportableType},
  schema::report,
  source::report::{Report, ReportForm},
  utils::{get_conn, DbPool},
};
use diesel::{
  dsl::insert_into,
  result::{DatabaseErrorKind, Error},
  ExpressionMethods, QueryDsl,
};
use diesel_async::RunQueryDsl;
use lostpaws_utils::error::{LostpawsError, LostpawsErrorType, LostpawsResult};

impl Report {
  /// Inserts a report. A violation of the (reportable_id, reportable_type, creator_id)
  /// uniqueness becomes [`LostpawsErrorType::DuplicateReport`] so callers can treat a repeated
  /// report as the idempotent outcome it is; every other storage error passes through untouched.
  pub async fn report(pool: &mut DbPool<'_>, form: &ReportForm) -> LostpawsResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(report::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .map_err(|e| match e {
        Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
          LostpawsErrorType::DuplicateReport.into()
        }
        _ => LostpawsError::from(e),
      })
  }

  /// Number of outstanding reports against one target.
  pub async fn active_count(
    pool: &mut DbPool<'_>,
    reportable_id: i32,
    reportable_type: ReportableType,
  ) -> Result<i64, Error> {
    let conn = &mut get_conn(pool).await?;
    report::table
      .filter(report::reportable_id.eq(reportable_id))
      .filter(report::reportable_type.eq(reportable_type))
      .count()
      .get_result(conn)
      .await
  }

  /// The distinct reasons accumulated across the outstanding reports of one target.
  pub async fn distinct_reasons(
    pool: &mut DbPool<'_>,
    reportable_id: i32,
    reportable_type: ReportableType,
  ) -> Result<Vec<ReportReason>, Error> {
    let conn = &mut get_conn(pool).await?;
    report::table
      .filter(report::reportable_id.eq(reportable_id))
      .filter(report::reportable_type.eq(reportable_type))
      .select(report::reason)
      .distinct()
      .load(conn)
      .await
  }

  /// Clears all reports for a target, the approve half of the moderation decision.
  pub async fn delete_for_target(
    pool: &mut DbPool<'_>,
    reportable_id: i32,
    reportable_type: ReportableType,
  ) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(
      report::table
        .filter(report::reportable_id.eq(reportable_id))
        .filter(report::reportable_type.eq(reportable_type)),
    )
    .execute(conn)
    .await
  }
}
