use crate::{
    create_initial_balls, step, BallSet, Config, Events, GameRng, SimError, Table, Time,
};

/// Everything one running table needs, owned by the caller
pub struct Simulation {
    balls: BallSet,
    table: Table,
    config: Config,
    time: Time,
    events: Events,
    rng: GameRng,
}

impl Simulation {
    /// Opening layout on a table sized by `config`
    pub fn new(config: Config, seed: u64) -> Result<Self, SimError> {
        config.validate()?;
        let table = Table::with_corner_pockets(config.table_width, config.table_height)?;
        let mut rng = GameRng::new(seed);
        let balls = create_initial_balls(table.width(), table.height(), &mut rng);

        log::info!(
            "billiards: {} balls on a {}x{} table, seed {}",
            balls.len(),
            table.width(),
            table.height(),
            seed
        );

        Ok(Self::assemble(config, table, balls, rng))
    }

    /// Custom layout; `balls` was validated when the set was built
    pub fn from_parts(
        config: Config,
        table: Table,
        balls: BallSet,
        rng: GameRng,
    ) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self::assemble(config, table, balls, rng))
    }

    fn assemble(config: Config, table: Table, balls: BallSet, rng: GameRng) -> Self {
        Self {
            balls,
            table,
            time: Time::default(),
            config,
            events: Events::new(),
            rng,
        }
    }

    /// One sweep of `config.time_step`
    pub fn tick(&mut self) {
        self.advance(1.0);
    }

    /// Advance by `frames` reference frames (fractional allowed)
    ///
    /// Hosts that want frame-rate independent motion pass the measured
    /// frame duration divided by the reference frame length. Fractions
    /// accumulate until they add up to a whole frame.
    pub fn advance(&mut self, frames: f32) {
        if !frames.is_finite() || frames <= 0.0 {
            return;
        }
        self.time.dt = frames;
        step(
            &mut self.balls,
            &self.table,
            &self.config,
            &mut self.time,
            &mut self.events,
            &mut self.rng,
        );
    }

    pub fn balls(&self) -> &BallSet {
        &self.balls
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events raised by the most recent step
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn time(&self) -> &Time {
        &self.time
    }
}
