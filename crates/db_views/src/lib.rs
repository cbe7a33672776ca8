pub mod comment_moderation_view;
pub mod local_person_view;
pub mod post_moderation_view;
pub mod structs;
