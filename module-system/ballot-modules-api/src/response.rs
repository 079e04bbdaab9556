/// Response type for the `Module::call` method.
///
/// Events are recorded on the working set, so a successful call has nothing else to
/// report.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CallResponse {}
