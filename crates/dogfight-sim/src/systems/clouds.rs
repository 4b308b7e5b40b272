//! Cloud population system — keeps the scenery registry topped up.

use rand_chacha::ChaCha8Rng;

use dogfight_core::constants::CLOUD_FLOOR;
use dogfight_core::entities::Cloud;
use dogfight_core::types::{Position, Size};

use crate::world_setup;

/// Top the cloud registry back up to its floor with fresh off-screen
/// spawns around the player. Runs before collision handling each frame.
pub fn run(clouds: &mut Vec<Cloud>, player_position: Position, screen: &Size, rng: &mut ChaCha8Rng) {
    while clouds.len() < CLOUD_FLOOR {
        clouds.push(world_setup::spawn_cloud(player_position, screen, rng));
    }
}
