use std::collections::BTreeMap;
use std::io::Write;

use super::types::DiceError;

/// Receives the outcomes drawn for a histogram.
pub trait Plotter {
    fn plot(&mut self, samples: &[i64]) -> Result<(), DiceError>;
}

/// Horizontal bar chart, one line per distinct outcome.
pub struct TextPlotter<W: Write> {
    out: W,
    bar_width: usize,
}

impl<W: Write> TextPlotter<W> {
    pub fn new(out: W, bar_width: usize) -> Self {
        Self { out, bar_width }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Plotter for TextPlotter<W> {
    fn plot(&mut self, samples: &[i64]) -> Result<(), DiceError> {
        let counts = frequencies(samples);
        let Some(&peak) = counts.values().max() else {
            return Ok(());
        };
        let label_width = counts.keys().map(|k| k.to_string().len()).max().unwrap_or(1);

        for (outcome, count) in &counts {
            let bar = self.bar_width * count / peak;
            writeln!(self.out, "{:>label_width$} | {} {}", outcome, "#".repeat(bar), count)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Occurrences of each outcome, ascending by outcome.
pub fn frequencies(samples: &[i64]) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for &sample in samples {
        *counts.entry(sample).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequencies_counts_each_outcome() {
        let counts = frequencies(&[3, 1, 3, 2, 3]);
        assert_eq!(counts.into_iter().collect::<Vec<_>>(), vec![(1, 1), (2, 1), (3, 3)]);
    }

    #[test]
    fn test_text_plotter_scales_bars_to_peak() {
        let mut plotter = TextPlotter::new(Vec::new(), 10);
        plotter.plot(&[1, 2, 2, 10, 10, 10, 10]).unwrap();

        let rendered = String::from_utf8(plotter.into_inner()).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                " 1 | ## 1",
                " 2 | ##### 2",
                "10 | ########## 4",
            ]
        );
    }

    #[test]
    fn test_text_plotter_empty_input_writes_nothing() {
        let mut plotter = TextPlotter::new(Vec::new(), 10);
        plotter.plot(&[]).unwrap();
        assert!(plotter.into_inner().is_empty());
    }
}
