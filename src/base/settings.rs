/// User-adjustable knobs shared by the literal parser and the interactive front end.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Precision in bits of long float literals (`1.5t0`, `2l3`), rounded up to whole words by
    /// [`BigFloat`](crate::BigFloat). 64 bits corresponds to the x87 extended format.
    pub long_precision: u32,
    /// Largest decimal exponent accepted in a literal.
    pub max_exponent: u64,
    /// Upper bound on the length of an exact decimal expansion the REPL is willing to compute.
    pub max_digits: u64,
    /// Whether the classification cascade is traced.
    pub trace: bool,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            long_precision: 64,
            max_exponent: 100_000,
            max_digits: 1_000_000,
            trace: false,
        }
    }
}
