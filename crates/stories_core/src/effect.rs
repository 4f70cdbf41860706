#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the editable term to the durable store.
    PersistTerm { value: String },
    Fetch {
        request_id: crate::RequestId,
        url: String,
    },
    CancelFetch { request_id: crate::RequestId },
}
