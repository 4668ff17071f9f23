use grid_stepsearch::{SearchEngine, StepEvent};
use grid_util::point::Point;

// In this example a path is found on a 5x5 grid from the top-left corner
// S to the bottom-right corner E:
//  _____
// |S    |
// |     |
// |     |
// |     |
// |    E|
//  _____
//
// Cells have a 4-neighborhood, so the shortest path takes 8 unit moves.

fn main() {
    let mut engine = SearchEngine::new(5, 5);
    let start = Point::new(0, 0);
    let end = Point::new(4, 4);
    engine.start(start, end).unwrap();
    loop {
        match engine.step().unwrap() {
            StepEvent::PathFound | StepEvent::Exhausted => break,
            _ => {}
        }
    }
    println!("Path:");
    for p in engine.reconstruct_path() {
        println!("{:?}", p);
    }
}
