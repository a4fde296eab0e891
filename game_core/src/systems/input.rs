use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Apply queued input directions to human-controlled paddle intents.
///
/// Paddles driven by an `AiController` ignore device input. An intent keeps
/// its last direction until a new input for that side arrives.
pub fn ingest_inputs(world: &mut World, input_queue: &mut InputQueue) {
    for &(side, dir) in &input_queue.inputs {
        for (_entity, (paddle, intent, ai)) in
            world.query_mut::<(&Paddle, &mut PaddleIntent, Option<&AiController>)>()
        {
            if paddle.side == side && ai.is_none() {
                intent.dir = dir;
            }
        }
    }

    // Clear processed inputs
    input_queue.clear();
}
