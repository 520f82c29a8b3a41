//! Interactive operator session
//!
//! This module handles:
//! - The main menu and the connect/disconnect handshake
//! - The User Programming menu: parameters, building, viewing, executing
//! - Saving and loading the command bank
//!
//! All mutable state lives in one `SessionState` owned by the `Session`.

mod builder;
mod connection;
mod menu;
mod parameters;
mod persistence;

pub use builder::build_list;
pub use connection::{connect_robot, disconnect_robot};
pub use parameters::ask_parameters;
pub use persistence::{load_bank, save_bank, LoadOutcome, SaveOutcome};

use crate::config::ConsoleConfig;
use crate::console::Operator;
use crate::engine::Executor;
use crate::robot::RobotInterface;
use rover_shared::{CommandBank, ExecutionParameters};

/// Everything the operator builds up during a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub bank: CommandBank,
    pub params: ExecutionParameters,
    pub robot_connected: bool,
}

/// A console session driving one robot
pub struct Session<R, O> {
    config: ConsoleConfig,
    executor: Executor,
    state: SessionState,
    robot: R,
    operator: O,
}

impl<R: RobotInterface, O: Operator> Session<R, O> {
    pub fn new(config: ConsoleConfig, robot: R, operator: O) -> Self {
        let executor = Executor::new(config.engine);
        Self {
            config,
            executor,
            state: SessionState::default(),
            robot,
            operator,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn robot(&self) -> &R {
        &self.robot
    }

    pub fn robot_mut(&mut self) -> &mut R {
        &mut self.robot
    }

    pub fn operator_mut(&mut self) -> &mut O {
        &mut self.operator
    }

    #[cfg(test)]
    pub fn operator(&self) -> &O {
        &self.operator
    }
}
