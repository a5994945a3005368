use uuid::Uuid;

/// Supplies the `Guid` of each generated profile.
///
/// Production code uses [`RandomGuids`]; tests can plug in a fixed sequence.
pub trait GuidSource {
    /// Returns a value not handed out before.
    fn next_guid(&mut self) -> String;
}

/// Random version 4 UUIDs in uppercase hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomGuids;

impl GuidSource for RandomGuids {
    fn next_guid(&mut self) -> String {
        Uuid::new_v4().hyphenated().to_string().to_uppercase()
    }
}

impl<F> GuidSource for F
where
    F: FnMut() -> String,
{
    fn next_guid(&mut self) -> String {
        self()
    }
}
