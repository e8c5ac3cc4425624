//! At-the-money strike selection.

/// Outcome of an ATM strike search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtmSelection {
    /// Strike nearest to spot.
    pub strike: f64,
    /// True when another distinct strike was exactly as close to spot.
    pub tied: bool,
}

/// Selects the strike minimising `|strike - spot|`.
///
/// When two distinct strikes are equidistant the lower strike wins and the
/// selection is marked `tied`. The result does not depend on the order of
/// `strikes`. Non-finite strikes are ignored.
///
/// Returns `None` when no finite strike is supplied.
///
/// # Examples
///
/// ```
/// use pricer_models::calibration::select_atm_strike;
///
/// let atm = select_atm_strike(102.0, [95.0, 100.0, 105.0]).unwrap();
/// assert_eq!(atm.strike, 100.0);
/// assert!(!atm.tied);
///
/// let atm = select_atm_strike(100.0, [105.0, 95.0]).unwrap();
/// assert_eq!(atm.strike, 95.0);
/// assert!(atm.tied);
/// ```
pub fn select_atm_strike<I>(spot: f64, strikes: I) -> Option<AtmSelection>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(AtmSelection, f64)> = None;

    for strike in strikes.into_iter().filter(|k| k.is_finite()) {
        let distance = (strike - spot).abs();
        best = match best {
            None => Some((
                AtmSelection {
                    strike,
                    tied: false,
                },
                distance,
            )),
            Some((current, best_distance)) => {
                if distance < best_distance {
                    Some((
                        AtmSelection {
                            strike,
                            tied: false,
                        },
                        distance,
                    ))
                } else if distance == best_distance && strike != current.strike {
                    Some((
                        AtmSelection {
                            strike: current.strike.min(strike),
                            tied: true,
                        },
                        distance,
                    ))
                } else {
                    Some((current, best_distance))
                }
            }
        };
    }

    best.map(|(selection, _)| selection)
}
