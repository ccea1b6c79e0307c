mod achievement;
mod category;
mod life_event;
mod profile;
mod report;
mod state;

pub use achievement::{Achievement, AchievementId, achievement_catalog};
pub use category::{AssetCategory, CategoryAmounts};
pub use life_event::{LifeEvent, default_life_events};
pub use profile::{Career, UserProfile};
pub use report::{LoginReport, MonthReport};
pub use state::{ChatMessage, ChatRole, GamePhase, GameState, MonthRecord, Outcome};
