pub mod content;
pub mod forum;
pub mod user;

pub use content::{Content, ContentId, ContentType, Genre, ProductionCompanyId};
pub use forum::{ForumPost, ForumPostReport, ForumThread, PostId, ReportId, ThreadId};
pub use user::Role;
