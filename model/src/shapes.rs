/// Fault attribution of an error shape.
///
/// Every well-formed error shape is attributed to exactly one side.
/// `Unattributed` is representable so that a model which slipped past
/// upstream validation surfaces as a hard generation error instead of a
/// silently wrong retry classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultSource {
    Client,
    Server,
    Unattributed,
}

/// The retryable annotation on an error shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetryableMarker {
    pub throttling: bool,
}

/// A single member (field) of an error shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    name: String,
    target: String,
    required: bool,
}

impl Member {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// A structure shape marked as an error in the interface model.
///
/// Read-only input to the generators; validation happens upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorShape {
    id: String,
    fault: FaultSource,
    retryable: Option<RetryableMarker>,
    members: Vec<Member>,
}

impl ErrorShape {
    pub fn new(id: impl Into<String>, fault: FaultSource) -> Self {
        Self {
            id: id.into(),
            fault,
            retryable: None,
            members: Vec::new(),
        }
    }

    pub fn with_retryable(mut self, throttling: bool) -> Self {
        self.retryable = Some(RetryableMarker { throttling });
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// The shape's stable identity as declared in the model.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fault(&self) -> FaultSource {
        self.fault
    }

    pub fn retryable(&self) -> Option<RetryableMarker> {
        self.retryable
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// The member carrying the human-readable message, if the shape declares one.
    pub fn message_member(&self) -> Option<&Member> {
        self.members
            .iter()
            .find(|member| matches!(member.name(), "message" | "Message" | "errorMessage"))
    }
}

/// An operation and the ordered list of error shapes it may return.
///
/// Declaration order is preserved: it drives both the variant order of the
/// combined error enum and the check order of the generated conversions.
/// The list is duplicate-free by upstream contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationShape {
    id: String,
    errors: Vec<ErrorShape>,
}

impl OperationShape {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            errors: Vec::new(),
        }
    }

    pub fn with_error(mut self, error: ErrorShape) -> Self {
        self.errors.push(error);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn errors(&self) -> &[ErrorShape] {
        &self.errors
    }
}
