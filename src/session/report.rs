use crate::board::SquareSet;
use crate::game::{destinations_line, Activation};

use super::SessionOptions;

/// `destinations <sq> <sq> ...`, or `destinations none`.
#[must_use]
pub fn format_destinations(destinations: SquareSet, options: &SessionOptions) -> String {
    destinations_line(destinations, |index| options.format_square(index))
}

/// One report line per activation.
#[must_use]
pub fn format_activation(activation: &Activation, options: &SessionOptions) -> String {
    activation.report(|index| options.format_square(index))
}
