use wasm_bindgen::prelude::*;
use seek_engine::InputEvent;

/// The seven streets of Bilbao's Casco Viejo, hidden in a 17×12 grid.
/// BARRENKALE also reads down column 11 inside BARRENKALEBARRENA; the
/// guard keeps that column for the long street only.
pub const PUZZLE_JSON: &str = include_str!("../puzzle.json");

seek_web::export_puzzle!(PUZZLE_JSON, "siete-calles");

#[cfg(test)]
mod tests {
    use super::*;
    use seek_engine::{Cell, GuardLine, PuzzleConfig};
    use seek_web::PuzzleRunner;

    #[test]
    fn puzzle_loads() {
        let config = PuzzleConfig::from_json(PUZZLE_JSON).unwrap();
        assert_eq!(config.guards[0].line, GuardLine::Column(11));

        let puzzle = config.build().unwrap();
        assert_eq!(puzzle.grid.dimensions(), (17, 12));
        assert_eq!(puzzle.matcher.target_count(), 7);
        assert_eq!(puzzle.matcher.palette().len(), 7);
    }

    #[test]
    fn every_street_is_hidden_exactly_once() {
        let puzzle = PuzzleConfig::from_json(PUZZLE_JSON).unwrap().build().unwrap();
        for word in puzzle.matcher.words() {
            let placements = puzzle.grid.find(word);
            let expected = if word == "BARRENKALE" { 2 } else { 1 };
            assert_eq!(placements.len(), expected, "{word}");
        }

        let long = puzzle.grid.find("BARRENKALEBARRENA");
        assert_eq!(long[0].start, Cell::new(0, 11));
        assert_eq!(long[0].end(), Cell::new(16, 11));
    }

    #[test]
    fn runner_solves_the_whole_puzzle() {
        let mut runner = PuzzleRunner::from_json(PUZZLE_JSON).unwrap();
        runner.resize(0.0, 0.0, 480.0, 680.0); // 40 px cells

        let puzzle = PuzzleConfig::from_json(PUZZLE_JSON).unwrap().build().unwrap();
        let at = |cell: Cell| (cell.col as f32 * 40.0 + 20.0, cell.row as f32 * 40.0 + 20.0);

        for word in puzzle.matcher.words() {
            let placement = puzzle
                .grid
                .find(word)
                .into_iter()
                .find(|p| word != "BARRENKALE" || p.step == (0, 1))
                .unwrap();
            let (x0, y0) = at(placement.start);
            let (x1, y1) = at(placement.end());
            runner.push_input(InputEvent::PointerDown { x: x0, y: y0 });
            runner.push_input(InputEvent::PointerMove { x: x1, y: y1 });
            runner.push_input(InputEvent::PointerUp { x: x1, y: y1 });
        }
        runner.tick();

        assert_eq!(runner.found_count(), 7);
        assert!(runner.search().is_complete());
        assert_eq!(runner.events_len(), 8); // seven words + completion
    }
}
