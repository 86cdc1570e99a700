use jaws::settings::{self};
use jaws::simulation::Simulation;

fn main() {
    let settings = settings::load_config().unwrap();
    let mut simulation = Simulation::new(settings);

    let waveform = simulation.run();
    simulation.writeup(&waveform);
}
