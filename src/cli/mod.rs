pub mod orchestration;

pub use orchestration::{run_task, Task, TaskOutput};
