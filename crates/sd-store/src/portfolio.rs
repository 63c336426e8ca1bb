use crate::error::{Result as StoreErrorResult, StoreError};

use sd_core::{Portfolio, PortfolioPosition};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{info, warn};
use uuid::Uuid;

/// Portfolios keyed by owner username. An owner may hold several; lookups
/// default to the first created.
#[derive(Debug, Default)]
pub struct PortfolioStore {
    portfolios: Vec<Portfolio>,
}

impl PortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, owner: &str, name: &str, balance: f64) -> Uuid {
        let portfolio = Portfolio::new(owner, name, balance);
        let id = portfolio.id;
        info!("{owner} created portfolio {name}");
        self.portfolios.push(portfolio);
        id
    }

    pub fn list_for(&self, owner: &str) -> Vec<&Portfolio> {
        self.portfolios.iter().filter(|p| p.owner == owner).collect()
    }

    #[track_caller]
    pub fn portfolio_for(&self, owner: &str) -> StoreErrorResult<&Portfolio> {
        self.portfolios
            .iter()
            .find(|p| p.owner == owner)
            .ok_or(StoreError::NoPortfolio {
                owner: owner.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn portfolio_for_mut(&mut self, owner: &str) -> StoreErrorResult<&mut Portfolio> {
        self.portfolios
            .iter_mut()
            .find(|p| p.owner == owner)
            .ok_or(StoreError::NoPortfolio {
                owner: owner.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Add a strategy slot to the owner's portfolio. Rejects a second slot
    /// for the same strategy; allocations past 100% are allowed but logged.
    #[track_caller]
    pub fn add_position(
        &mut self,
        owner: &str,
        position: PortfolioPosition,
    ) -> StoreErrorResult<()> {
        let portfolio = self.portfolio_for_mut(owner)?;

        if portfolio.position(position.strategy_id).is_some() {
            return Err(StoreError::DuplicatePosition {
                strategy_id: position.strategy_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        portfolio.positions.push(position);
        if portfolio.is_over_allocated() {
            warn!(
                "{owner} portfolio over-allocated at {total:.1}%",
                total = portfolio.total_allocation()
            );
        }
        Ok(())
    }

    #[track_caller]
    pub fn remove_position(&mut self, owner: &str, strategy_id: u32) -> StoreErrorResult<()> {
        let portfolio = self.portfolio_for_mut(owner)?;

        let before = portfolio.positions.len();
        portfolio.positions.retain(|p| p.strategy_id != strategy_id);
        if portfolio.positions.len() == before {
            return Err(StoreError::UnknownPosition {
                strategy_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
