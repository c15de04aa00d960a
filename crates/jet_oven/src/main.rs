use bevy::app::AppExit;

fn main() -> AppExit {
    jet_oven::run()
}
