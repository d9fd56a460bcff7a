use std::fmt;
use std::io::{self, Write};

use super::plot::Plotter;
use super::roller::Roller;
use super::types::{format_draws, DiceError, Face, RollRequest, RollResult};
use crate::config::StatsConfig;
use serde::{Deserialize, Serialize};

/// Face counts of the standard polyhedral set, in the order `full_dice_set` yields them.
pub const STANDARD_FACE_COUNTS: [u32; 8] = [1, 4, 6, 8, 10, 12, 20, 100];

pub const COPY_PASTE_SNIPPET: &str =
    "let [d1, d4, d6, d8, d10, d12, d20, d100] = roll_dice::Die::standard_set();";

/// Polyhedron name for the well-known face counts.
pub fn shape_name(face_count: u32) -> Option<&'static str> {
    match face_count {
        4 => Some("Tetrahedron"),
        6 => Some("Cube"),
        8 => Some("Octahedron"),
        10 => Some("Pentagonal trapezohedron"),
        12 => Some("Dodecahedron"),
        20 => Some("Icosahedron"),
        100 => Some("Zocchihedron"),
        _ => None,
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDie")]
pub struct Die {
    face_count: u32,
    faces: Vec<Face>,
}

/// Unchecked wire form of a `Die`, validated on the way in.
#[derive(Deserialize)]
struct RawDie {
    face_count: u32,
    faces: Vec<Face>,
}

impl TryFrom<RawDie> for Die {
    type Error = DiceError;

    fn try_from(raw: RawDie) -> Result<Self, Self::Error> {
        check_face_count(raw.face_count, &raw.faces)?;
        Ok(Self { face_count: raw.face_count, faces: raw.faces })
    }
}

impl Die {
    /// A plain die numbered `1..=face_count`. Zero faces is accepted and gives an empty die.
    pub fn new(face_count: u32) -> Self {
        Self {
            face_count,
            faces: (1..=i64::from(face_count)).map(Face::Number).collect(),
        }
    }

    /// A die with explicit faces. The number of faces must match `face_count`.
    #[tracing::instrument(skip(faces))]
    pub fn with_faces<I>(face_count: u32, faces: I) -> Result<Self, DiceError>
    where
        I: IntoIterator,
        I::Item: Into<Face>,
    {
        let faces: Vec<Face> = faces.into_iter().map(Into::into).collect();
        check_face_count(face_count, &faces)?;
        Ok(Self { face_count, faces })
    }

    pub fn full_dice_set() -> impl Iterator<Item = Die> {
        STANDARD_FACE_COUNTS.into_iter().map(Die::new)
    }

    pub fn standard_set() -> [Die; 8] {
        STANDARD_FACE_COUNTS.map(Die::new)
    }

    pub fn copy_paste_snippet() {
        println!("{}", COPY_PASTE_SNIPPET);
    }

    // Getters
    pub fn get_face_count(&self) -> u32 {
        self.face_count
    }

    pub fn get_faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn get_shape(&self) -> Option<&'static str> {
        shape_name(self.face_count)
    }

    pub fn is_numeric(&self) -> bool {
        self.faces.iter().all(Face::is_numeric)
    }

    /// Mean of `1..=face_count`. Custom faces are not taken into account.
    pub fn average(&self) -> Option<f64> {
        if self.face_count == 0 {
            return None;
        }
        Some((f64::from(self.face_count) + 1.0) / 2.0)
    }

    //  --- Public mutators ---
    #[tracing::instrument(skip(self, new_faces), fields(die = self.face_count))]
    pub fn replace_faces<I>(&mut self, new_faces: I) -> Result<(), DiceError>
    where
        I: IntoIterator,
        I::Item: Into<Face>,
    {
        let faces: Vec<Face> = new_faces.into_iter().map(Into::into).collect();
        check_face_count(self.face_count, &faces)?;
        self.faces = faces;
        Ok(())
    }

    //  --- Rolling ---
    pub fn roll(&self, roller: &mut impl Roller, request: RollRequest) -> Result<RollResult, DiceError> {
        self.roll_to(roller, request, &mut io::stdout())
    }

    /// Same as `roll`, but the `show_each` listing goes to `out`.
    #[tracing::instrument(skip(self, roller, out), fields(die = self.face_count))]
    pub fn roll_to(
        &self,
        roller: &mut impl Roller,
        request: RollRequest,
        out: &mut impl Write,
    ) -> Result<RollResult, DiceError> {
        let draws = self.draw(roller, request.times)?;
        if request.show_each {
            writeln!(out, "{}", format_draws(&draws))?;
        }
        tracing::debug!(draws = %format_draws(&draws), "rolled");

        let numbers: Option<Vec<i64>> = draws.iter().map(Face::as_number).collect();
        let result = match numbers {
            Some(numbers) => RollResult::Sum(checked_total(numbers.into_iter().chain([request.bonus]))?),
            // Text faces cannot be summed, the bonus is dropped along with the total
            None => RollResult::RawDraws(draws),
        };
        Ok(result)
    }

    pub fn roll_once(&self, roller: &mut impl Roller) -> Result<RollResult, DiceError> {
        self.roll(roller, RollRequest::default())
    }

    /// Rolls both dice once and adds the results.
    #[tracing::instrument(skip(self, other, roller), fields(die = self.face_count, other = other.face_count))]
    pub fn combine(&self, other: &Die, roller: &mut impl Roller) -> Result<i64, DiceError> {
        let mine = self.numeric_roll(roller)?;
        let theirs = other.numeric_roll(roller)?;
        checked_total([mine, theirs])
    }

    //  --- Statistics ---
    #[tracing::instrument(skip(self, roller), fields(die = self.face_count))]
    pub fn histogram_samples(&self, roller: &mut impl Roller, stats: &StatsConfig) -> Result<Vec<i64>, DiceError> {
        (0..stats.sample_count).map(|_| self.numeric_roll(roller)).collect()
    }

    pub fn plot_histogram(
        &self,
        roller: &mut impl Roller,
        stats: &StatsConfig,
        plotter: &mut impl Plotter,
    ) -> Result<(), DiceError> {
        let samples = self.histogram_samples(roller, stats)?;
        tracing::info!(die = self.face_count, samples = samples.len(), "Plotting histogram");
        plotter.plot(&samples)
    }

    //  --- Private helpers ---
    fn draw(&self, roller: &mut impl Roller, times: u32) -> Result<Vec<Face>, DiceError> {
        if times == 0 {
            return Ok(Vec::new());
        }
        if self.faces.is_empty() {
            return Err(DiceError::NoFaces);
        }

        let max = self.faces.len() as u32;
        let draws = (0..times)
            .map(|_| {
                let index = roller.roll_in_range(max) as usize - 1;
                self.faces[index].clone()
            })
            .collect();
        Ok(draws)
    }

    fn numeric_roll(&self, roller: &mut impl Roller) -> Result<i64, DiceError> {
        self.roll_once(roller)?.as_sum().ok_or_else(|| {
            tracing::warn!(die = self.face_count, "Roll produced a non-numeric result");
            DiceError::IncompatibleRoll { die: self.face_count }
        })
    }
}

fn checked_total(values: impl IntoIterator<Item = i64>) -> Result<i64, DiceError> {
    values
        .into_iter()
        .try_fold(0i64, |acc, v| acc.checked_add(v))
        .ok_or(DiceError::Overflow)
}

fn check_face_count(face_count: u32, faces: &[Face]) -> Result<(), DiceError> {
    if faces.len() != face_count as usize {
        tracing::warn!(expected = face_count, actual = faces.len(), "Face count mismatch");
        return Err(DiceError::FaceCountMismatch { expected: face_count, actual: faces.len() });
    }
    Ok(())
}

impl fmt::Debug for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Die({})", self.face_count)
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Die #{}: {}", self.face_count, self.get_shape().unwrap_or("unknown"))?;
        let faces: Vec<String> = self.faces.iter().map(Face::to_string).collect();
        f.write_str(&faces.join(" "))
    }
}
