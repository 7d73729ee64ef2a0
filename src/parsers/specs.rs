/// Fewest spec items a listing needs before it is emitted
pub const MIN_SPEC_ITEMS: usize = 7;

/// Spec items of a listing mapped onto named fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecFields {
    pub reg: String,
    pub body_type: String,
    pub mileage: String,
    pub engine_size: String,
    pub engine_power: Option<String>,
    pub gearbox: String,
    pub fuel_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecOutcome {
    Complete(SpecFields),
    /// Too few items to place gearbox and fuel type reliably
    Insufficient { count: usize },
}

/// Maps an ordered spec list onto fields by position.
///
/// The first four items are always reg, body type, mileage and engine size,
/// and the fifth is engine power. Gearbox and fuel type are the final two
/// items, so unexpected extras between engine power and gearbox are ignored.
pub fn normalize_specs(mut items: Vec<String>) -> SpecOutcome {
    let count = items.len();
    if count < MIN_SPEC_ITEMS {
        return SpecOutcome::Insufficient { count };
    }

    let fuel_type = items.pop().unwrap_or_default();
    let gearbox = items.pop().unwrap_or_default();
    let mut head = items.into_iter();
    let mut next = || head.next().unwrap_or_default();

    SpecOutcome::Complete(SpecFields {
        reg: next(),
        body_type: next(),
        mileage: next(),
        engine_size: next(),
        engine_power: Some(next()),
        gearbox,
        fuel_type,
    })
}
