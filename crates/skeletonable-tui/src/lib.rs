pub mod animation;
pub mod app;
pub mod appearance;
pub mod capability;
pub mod cells;
pub mod color;
pub mod coordinator;
pub mod demo;
pub mod event;
pub mod input;
pub mod loader;
pub mod render;
pub mod style;
pub mod surface;
pub mod table;
pub mod theme;
pub mod themes;
pub mod widgets;

pub use app::App;
pub use appearance::{Appearance, AppearanceDefaults};
pub use capability::{ItemContent, RecyclableItem, Skeletonable};
pub use coordinator::{IndexPath, SkeletonCoordinator, SkeletonHost};
pub use render::SkeletonPainter;
pub use style::{SkeletonAnimation, SkeletonStyle, TransitionStyle};
pub use surface::{SkeletonSurface, SurfaceElement};
pub use table::{SkeletonTable, TableDataSource};
pub use theme::Theme;
pub use themes::load_theme;
