use crate::pipeline::session::IngestResult;

// Markers to track the state of the frame processing pipeline
pub struct IngestedState;
pub struct ClassifiedState {
    pub(super) result: IngestResult,
}
