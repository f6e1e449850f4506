const STEP_MULTIPLIERS: [u64; 3] = [1, 2, 5];

/// Evenly spaced tick values from 0 up to `max`, using the smallest step of
/// the form 1, 2 or 5 x 10^k that yields at most `max_ticks` ticks.
#[must_use]
pub fn nice_ticks(max: u32, max_ticks: usize) -> Vec<u32> {
    if max == 0 || max_ticks < 2 {
        return vec![0];
    }

    let max = u64::from(max);
    let mut magnitude: u64 = 1;

    loop {
        for multiplier in STEP_MULTIPLIERS {
            let step = multiplier * magnitude;
            if max / step + 1 <= max_ticks as u64 {
                return (0..=max)
                    .step_by(step as usize)
                    .map(|tick| tick as u32)
                    .collect();
            }
        }

        magnitude *= 10;
    }
}
