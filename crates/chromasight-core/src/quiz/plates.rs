//! The built-in Ishihara plate table.

use serde::Serialize;

/// Option offered on every plate for "no number visible".
pub const CANT_SEE: &str = "Can't see";

/// One quiz question: a plate image and its answer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plate {
    /// 1-based plate number.
    pub id: u32,
    /// Image asset reference for the plate.
    pub image: &'static str,
    /// The number a viewer with normal color vision reads.
    pub correct_answer: &'static str,
    /// Answer choices shown for this plate. The last is always [`CANT_SEE`].
    pub options: [&'static str; 4],
}

impl Plate {
    pub fn has_option(&self, option: &str) -> bool {
        self.options.contains(&option)
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        !answer.is_empty() && answer == self.correct_answer
    }
}

/// The ten screening plates, in presentation order.
pub const PLATES: [Plate; 10] = [
    plate(1, "ishihara-plate-1.jpg", "12", ["12", "13", "15"]),
    plate(2, "ishihara-plate-2.jpg", "8", ["8", "3", "6"]),
    plate(3, "ishihara-plate-3.jpg", "6", ["6", "5", "9"]),
    plate(4, "ishihara-plate-4.jpg", "29", ["29", "70", "26"]),
    plate(5, "ishihara-plate-5.jpg", "57", ["57", "35", "37"]),
    plate(6, "ishihara-plate-6.jpg", "5", ["5", "2", "3"]),
    plate(7, "ishihara-plate-7.jpg", "3", ["3", "8", "5"]),
    plate(8, "ishihara-plate-8.jpg", "15", ["15", "17", "18"]),
    plate(9, "ishihara-plate-9.jpg", "74", ["74", "21", "71"]),
    plate(10, "ishihara-plate-10.jpg", "2", ["2", "5", "7"]),
];

const fn plate(
    id: u32,
    image: &'static str,
    correct_answer: &'static str,
    numbers: [&'static str; 3],
) -> Plate {
    Plate {
        id,
        image,
        correct_answer,
        options: [numbers[0], numbers[1], numbers[2], CANT_SEE],
    }
}

/// The answer key for [`PLATES`], in order.
pub fn answer_key() -> [&'static str; 10] {
    PLATES.map(|p| p.correct_answer)
}
