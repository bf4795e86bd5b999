use chrono::prelude::*;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

use crate::*;

/// Valid transitions:
/// - Start -> Running (first reveal, right after mine placement)
/// - Running -> Lost (a mine was revealed)
/// - Running -> Won (every safe tile revealed)
///
/// `Lost` and `Won` only go back to `Start` through `Game::start`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    /// Board reset, mines not placed yet, first reveal pending
    Start,
    /// Mines placed, game in progress
    Running,
    /// A mine went off; terminal
    Lost,
    /// Every safe tile revealed; terminal
    Won,
}

impl GameState {
    /// Indicates mines have not been placed yet
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::Start)
    }

    /// Indicates the game has ended and no moves are accepted anymore
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Start
    }
}

/// One game from the first click to win or loss. Owns the grid; the UI
/// drives it through `reveal` and `set_flag` and repaints from the read
/// accessors after every call that reports an update.
#[derive(Clone, Debug)]
pub struct Game<P = RandomPlacer> {
    config: BoardConfig,
    grid: Array2<Tile>,
    placer: P,
    state: GameState,
    revealed_safe: CellCount,
    active_flags: CellCount,
    placed_mines: CellCount,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

impl<P: MinePlacer> Game<P> {
    pub fn new(config: BoardConfig, placer: P) -> Self {
        Self {
            config,
            grid: Array2::default(config.size().to_nd_index()),
            placer,
            state: Default::default(),
            revealed_safe: 0,
            active_flags: 0,
            placed_mines: 0,
            started_at: None,
            ended_at: None,
        }
    }

    /// Resets every tile in place and goes back to `Start`; the next reveal
    /// places a fresh mine layout. The grid is never reallocated.
    pub fn start(&mut self) {
        self.grid.fill(Tile::default());
        self.state = GameState::Start;
        self.revealed_safe = 0;
        self.active_flags = 0;
        self.placed_mines = 0;
        self.started_at = None;
        self.ended_at = None;
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_final()
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> GridPos {
        self.config.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn tile_at(&self, pos: GridPos) -> Tile {
        self.grid[pos.to_nd_index()]
    }

    /// How many flags are left before matching the mine count, negative
    /// when the player over-flags
    pub fn flags_remaining(&self) -> isize {
        (self.config.mines as isize) - (self.active_flags as isize)
    }

    /// How many seconds have passed since the first reveal, 0 before it,
    /// frozen once the game ends
    pub fn elapsed_secs(&self) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or_else(Utc::now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }

    /// Reveals a tile. The first reveal of a game places the mines before
    /// anything else happens, whatever tile it lands on. Flagged and
    /// already-open tiles are left alone, a mine ends the game, a blank
    /// tile floods its whole region open.
    pub fn reveal(&mut self, pos: GridPos) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let pos = self.config.validate_pos(pos)?;

        if self.state.is_final() {
            return Ok(NoChange);
        }

        if self.state.is_initial() {
            self.deploy_mines(pos);
        }

        let tile = self.grid[pos.to_nd_index()];
        if tile.is_flag || tile.is_revealed {
            return Ok(NoChange);
        }

        if tile.is_mine {
            self.grid[pos.to_nd_index()].is_exploded_mine = true;
            self.disclose_board();
            self.finish(GameState::Lost);
            return Ok(HitMine);
        }

        self.open_tile(pos);

        // win is measured against the mines that actually landed, a placer
        // may fall short of the requested count
        if self.revealed_safe == self.config.total_tiles() - self.placed_mines {
            self.disclose_board();
            self.finish(GameState::Won);
            Ok(Won)
        } else {
            Ok(Revealed)
        }
    }

    /// Places or removes a flag on a hidden tile and adjusts the flag
    /// score. Open tiles reject the change; re-setting the current value is
    /// a no-op so the score cannot drift.
    pub fn set_flag(&mut self, pos: GridPos, flagged: bool) -> Result<FlagOutcome> {
        use FlagOutcome::*;

        let pos = self.config.validate_pos(pos)?;

        if self.state.is_final() {
            return Ok(NoChange);
        }

        let tile = &mut self.grid[pos.to_nd_index()];
        if tile.is_revealed || tile.is_flag == flagged {
            return Ok(NoChange);
        }

        tile.is_flag = flagged;
        if flagged {
            self.active_flags += 1;
        } else {
            self.active_flags -= 1;
        }
        log::debug!(
            "Flag at {:?} set to {}, {} left",
            pos,
            flagged,
            self.flags_remaining()
        );
        Ok(Changed)
    }

    /// What a renderer should draw at `pos` right now. While the game runs
    /// only player knowledge shows; after the end the whole board is
    /// disclosed, with mines flagged on a win and called out on a loss.
    pub fn view_at(&self, pos: GridPos) -> TileView {
        use TileView::*;

        let tile = self.tile_at(pos);

        match self.state {
            GameState::Won => {
                if tile.is_mine {
                    Flagged
                } else {
                    Open(tile.adjacent_mines)
                }
            }
            GameState::Lost if tile.is_exploded_mine => ExplodedMine,
            GameState::Lost => {
                if tile.is_mine {
                    if tile.is_flag {
                        Flagged
                    } else {
                        Mine
                    }
                } else if tile.is_flag {
                    Misflagged
                } else {
                    Open(tile.adjacent_mines)
                }
            }
            GameState::Start | GameState::Running => {
                if tile.is_flag {
                    Flagged
                } else if tile.is_revealed {
                    Open(tile.adjacent_mines)
                } else {
                    Hidden
                }
            }
        }
    }

    /// One-time side effect of the first reveal: applies the placer's mask
    /// and counts what actually landed, then computes every adjacency count
    /// and enters `Running`.
    fn deploy_mines(&mut self, first_reveal: GridPos) {
        let mask = self.placer.place(&self.config, first_reveal);
        assert_eq!(
            mask.dim(),
            self.grid.dim(),
            "placer mask must match the board shape"
        );

        let mut placed: CellCount = 0;
        for (tile, &is_mine) in self.grid.iter_mut().zip(mask.iter()) {
            tile.is_mine = is_mine;
            placed += is_mine as CellCount;
        }
        if placed != self.config.mines {
            log::warn!(
                "Mine count mismatch, placed: {}, requested: {}",
                placed,
                self.config.mines
            );
        }
        self.placed_mines = placed;

        self.compute_adjacency();

        let now = Utc::now();
        log::debug!("Started at {}, first reveal at {:?}", now, first_reveal);
        self.started_at.replace(now);
        self.state = GameState::Running;
    }

    /// Counts mines around every safe tile, once per game right after
    /// placement
    fn compute_adjacency(&mut self) {
        let (rows, columns) = self.size();
        for row in 0..rows {
            for column in 0..columns {
                let pos = (row, column);
                if self.grid[pos.to_nd_index()].is_mine {
                    continue;
                }
                let count = self
                    .grid
                    .iter_neighbor_cells(pos)
                    .filter(|neighbor| neighbor.is_mine)
                    .count() as u8;
                self.grid[pos.to_nd_index()].adjacent_mines = count;
            }
        }
    }

    /// Opens one safe tile. A blank tile expands through its whole zero
    /// region with an explicit worklist; every tile enters the frontier at
    /// most once and flags stop the expansion.
    fn open_tile(&mut self, pos: GridPos) {
        let count = self.grid[pos.to_nd_index()].adjacent_mines;
        self.grid[pos.to_nd_index()].is_revealed = true;
        self.revealed_safe += 1;
        log::debug!("Open tile at {:?}, adjacent mines: {}", pos, count);

        if count > 0 {
            return;
        }

        let mut visited = HashSet::from([pos]);
        let mut to_visit: VecDeque<GridPos> = self.grid.iter_neighbors(pos).collect();
        log::trace!(
            "Starting flood fill from {:?}, initial neighbors: {:?}",
            pos,
            to_visit
        );

        while let Some(visit_pos) = to_visit.pop_front() {
            if !visited.insert(visit_pos) {
                continue;
            }

            let tile = self.grid[visit_pos.to_nd_index()];
            if tile.is_revealed || tile.is_flag {
                log::trace!("Skipping tile at {:?}", visit_pos);
                continue;
            }

            self.grid[visit_pos.to_nd_index()].is_revealed = true;
            self.revealed_safe += 1;
            log::trace!(
                "Flood opened tile at {:?}, adjacent mines: {}",
                visit_pos,
                tile.adjacent_mines
            );

            if tile.adjacent_mines == 0 {
                to_visit.extend(
                    self.grid
                        .iter_neighbors(visit_pos)
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }

    /// Loss and win disclosure, every tile turns face up. Flags and
    /// counters stay as the player left them.
    fn disclose_board(&mut self) {
        for tile in self.grid.iter_mut() {
            tile.is_revealed = true;
        }
    }

    fn finish(&mut self, outcome: GameState) {
        let now = Utc::now();
        self.ended_at.replace(now);
        self.state = outcome;
        log::debug!("Ended at {} with {:?}", now, outcome);
    }
}
