use ta::Next;
use ta::indicators::SimpleMovingAverage;

/// Mean of the trailing `period` prices, or of all of them when fewer are
/// available. `None` for an empty slice or a zero period.
pub fn trailing_mean(prices: &[f64], period: usize) -> Option<f64> {
    if prices.is_empty() {
        return None;
    }

    let tail = &prices[prices.len().saturating_sub(period)..];
    let mut sma = SimpleMovingAverage::new(period).ok()?;
    tail.iter().fold(None, |_, price| Some(sma.next(*price)))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Momentum {
    pub avg_gain: f64,
    pub avg_loss: f64,
    pub rsi: f64,
}

/// Plain-average RSI over every consecutive pair in the window.
///
/// Zero differences count as neither gain nor loss. With no losses at all the
/// average loss falls back to 1 rather than 0, which keeps the ratio finite and
/// matches the values published by earlier versions of the service.
pub fn relative_strength(prices: &[f64]) -> Momentum {
    let (mut gain_sum, mut gain_count) = (0.0, 0usize);
    let (mut loss_sum, mut loss_count) = (0.0, 0usize);

    for pair in prices.windows(2) {
        let diff = pair[1] - pair[0];
        if diff > 0.0 {
            gain_sum += diff;
            gain_count += 1;
        } else if diff < 0.0 {
            loss_sum += diff.abs();
            loss_count += 1;
        }
    }

    let avg_gain = if gain_count > 0 {
        gain_sum / gain_count as f64
    } else {
        0.0
    };
    let avg_loss = if loss_count > 0 {
        loss_sum / loss_count as f64
    } else {
        1.0
    };

    // Unreachable after the fallback above; kept so the division stays guarded
    // if the fallback ever changes.
    let rs = if avg_loss != 0.0 {
        avg_gain / avg_loss
    } else {
        0.0
    };

    Momentum {
        avg_gain,
        avg_loss,
        rsi: 100.0 - 100.0 / (1.0 + rs),
    }
}

/// Rounds half to even, so exact ties land on the even digit.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
