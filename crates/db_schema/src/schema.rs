diesel::table! {
    use diesel::sql_types::*;

    person (id) {
        id -> Int4,
        name -> Varchar,
        published -> Timestamptz,
        updated -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    use diesel::sql_types::*;
    use crate::enums::{ContentStatusMapping, PostKindMapping};

    post (id) {
        id -> Int4,
        creator_id -> Int4,
        name -> Varchar,
        body -> Nullable<Text>,
        kind -> PostKindMapping,
        status -> ContentStatusMapping,
        published -> Timestamptz,
        updated -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    use diesel::sql_types::*;
    use crate::enums::ContentStatusMapping;

    comment (id) {
        id -> Int4,
        creator_id -> Int4,
        post_id -> Int4,
        parent_id -> Nullable<Int4>,
        reply_id -> Nullable<Int4>,
        content -> Text,
        status -> ContentStatusMapping,
        published -> Timestamptz,
        updated -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    use diesel::sql_types::*;
    use crate::enums::{ReportReasonMapping, ReportableTypeMapping};

    report (id) {
        id -> Int4,
        creator_id -> Int4,
        reportable_id -> Int4,
        reportable_type -> ReportableTypeMapping,
        reason -> ReportReasonMapping,
        published -> Timestamptz,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    moderator (id) {
        id -> Int4,
        person_id -> Int4,
        published -> Timestamptz,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    banned_person (id) {
        id -> Int4,
        person_id -> Int4,
        moderator_id -> Int4,
        report_id -> Nullable<Int4>,
        published -> Timestamptz,
    }
}

diesel::joinable!(post -> person (creator_id));
diesel::joinable!(comment -> post (post_id));
diesel::joinable!(comment -> person (creator_id));
diesel::joinable!(report -> person (creator_id));
diesel::joinable!(moderator -> person (person_id));
diesel::joinable!(banned_person -> person (person_id));
diesel::joinable!(banned_person -> moderator (moderator_id));
diesel::joinable!(banned_person -> report (report_id));

diesel::allow_tables_to_appear_in_same_query!(
  person,
  post,
  comment,
  report,
  moderator,
  banned_person,
);
