pub mod lesson;
pub mod loaders;
pub mod units;

pub use lesson::{LessonMaterials, ResolvedInput};
pub use loaders::{check_required_inputs, load_lesson_materials, resolve_inputs};
pub use units::{BaselineSets, CandidateSets, DiffResult};
