//! Console report rendering: run totals and an ASCII queue-length chart.
//!
//! The simulation core leaves the report format unconstrained; this module
//! renders for a terminal.  Everything is pure `Statistics → String` so it
//! can be tested without capturing stdout.

use des_sim::{QueueSample, Statistics};

/// Render the run totals.
///
/// The zero-customer case prints an explicit "undefined" average — never a
/// division by zero, never a bogus `0.00`.
pub fn render_report(stats: &Statistics) -> String {
    let avg = match stats.average_wait_mins() {
        Some(mins) => format!("{mins:.2} minutes"),
        None       => "undefined (no customers served)".to_string(),
    };
    format!(
        "Total customers served: {}\nAverage wait time:      {}\n",
        stats.total_customers, avg
    )
}

/// Render the queue-length time series as a `width` × `height` block chart.
///
/// Each column covers an equal slice of the run; its bar shows the maximum
/// queue length reached in that slice (the series is a step function, so the
/// value carried in from the previous slice counts too).  Returns `(no data)`
/// for an empty series.
pub fn render_queue_chart(samples: &[QueueSample], width: usize, height: usize) -> String {
    if samples.is_empty() || width == 0 || height == 0 {
        return "(no data)\n".to_string();
    }

    // Samples are time-ordered; the last one marks the end of the run.
    let t_end = samples[samples.len() - 1].time.0.max(f64::MIN_POSITIVE);
    let max_len = samples.iter().map(|s| s.length).max().unwrap_or(0).max(1);

    // Column values: max of the step function over each time slice.
    let mut cols = vec![0usize; width];
    let mut idx = 0;
    let mut carry = 0usize;
    for (c, col) in cols.iter_mut().enumerate() {
        let slice_end = t_end * (c as f64 + 1.0) / width as f64;
        let mut peak = carry;
        while idx < samples.len() && samples[idx].time.0 <= slice_end {
            carry = samples[idx].length;
            peak = peak.max(carry);
            idx += 1;
        }
        *col = peak;
    }

    let mut out = String::new();
    out.push_str(&format!("Queue length over time (peak {max_len})\n"));
    for row in 0..height {
        // Threshold for this row, scanning top-down: the top row is max_len,
        // the bottom row is the smallest positive bucket.
        let thr = (max_len * (height - row)).div_ceil(height);
        out.push_str(&format!("{thr:>4} ┤"));
        for &v in &cols {
            out.push(if v >= thr { '█' } else { ' ' });
        }
        out.push('\n');
    }
    out.push_str(&format!("   0 └{}\n", "─".repeat(width)));
    out.push_str(&format!("      0{:>w$.1} min\n", t_end, w = width - 1));
    out
}
