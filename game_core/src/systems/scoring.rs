use crate::{Bird, Config, Events, Pipe, Score};

/// Award a point for each pipe whose right edge just cleared the bird
pub fn score_passed_pipes(
    pipes: &mut [Pipe],
    bird: &Bird,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    for pipe in pipes.iter_mut().filter(|pipe| !pipe.scored) {
        if pipe.right(config.pipe_width) < bird.pos.x {
            pipe.scored = true;
            score.increment();
            events.pipes_scored += 1;
        }
    }
}
