use std::thread;
use std::time::Duration;

use grid_stepsearch::{CellRole, SearchEngine, Selection, StepEvent, UNREACHABLE};
use grid_util::grid::Grid;
use grid_util::point::Point;

// Animates a full search on the default 25x25 visualizer grid: marks a
// start and an end the way a user would click them, then advances the
// engine one step per tick and redraws the grid after every step.
//
// Legend: S start, E end, o explored, * shortest path, . untouched.

const TICK: Duration = Duration::from_millis(10);

fn render(engine: &SearchEngine, path: &[Point]) {
    // Clear the screen and move the cursor home.
    print!("\x1B[2J\x1B[H");
    for y in 0..engine.grid.height {
        for x in 0..engine.grid.width {
            let p = Point::new(x as i32, y as i32);
            let glyph = match engine.grid.get(x, y) {
                CellRole::Start => 'S',
                CellRole::End => 'E',
                CellRole::Empty if path.contains(&p) => '*',
                CellRole::Empty if engine.distance(p) != UNREACHABLE => 'o',
                CellRole::Empty => '.',
            };
            print!("{}", glyph);
        }
        println!();
    }
}

fn main() {
    let mut engine = SearchEngine::default();
    let mut selection = Selection::new();
    selection.toggle(&mut engine.grid, Point::new(2, 3));
    selection.toggle(&mut engine.grid, Point::new(21, 18));
    let (start, end) = selection.pair().unwrap();

    engine.start(start, end).unwrap();
    loop {
        let event = engine.step().unwrap();
        render(&engine, &[]);
        thread::sleep(TICK);
        match event {
            StepEvent::PathFound => break,
            StepEvent::Exhausted => {
                println!("no path");
                return;
            }
            _ => {}
        }
    }

    let path = engine.reconstruct_path();
    render(&engine, &path);
    println!("path of {} cells", path.len());
}
