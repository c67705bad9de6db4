// Weighted prize draw.
// Visual expectation: after a new card is requested, exactly one prize from the
// pool ends up hidden under the cover, with odds = weight / total weight.

use crate::error::Error;
use rand::Rng;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Prize {
    pub id: String,
    pub name: String,
    pub weight: u32,
}

impl Prize {
    pub fn new(id: impl Into<String>, name: impl Into<String>, weight: u32) -> Self {
        Self { id: id.into(), name: name.into(), weight }
    }
}

/// The stock pool used when no config file overrides it.
pub fn default_prizes() -> Vec<Prize> {
    vec![
        Prize::new("1", "JACKPOT $5,000", 1),
        Prize::new("2", "PINK GOLD $100", 5),
        Prize::new("3", "ROSE SILVER $20", 15),
        Prize::new("4", "BONUS SPIN", 30),
        Prize::new("5", "TRY AGAIN", 49),
    ]
}

/// Reject pools that cannot produce a winner. Returns the total weight.
pub fn validate_pool(pool: &[Prize]) -> Result<u64, Error> {
    if pool.is_empty() {
        return Err(Error::InvalidPool("pool is empty".into()));
    }
    let total: u64 = pool.iter().map(|p| u64::from(p.weight)).sum();
    if total == 0 {
        return Err(Error::InvalidPool(format!(
            "total weight of {} prizes is 0",
            pool.len()
        )));
    }
    Ok(total)
}

/// Cumulative-weight walk for an already drawn `unit` in [0, 1).
/// Falls back to the first prize when the walk runs off the end
/// (r landing exactly on the total weight).
pub fn select_with_unit(pool: &[Prize], unit: f64) -> Result<&Prize, Error> {
    let total = validate_pool(pool)?;
    let mut r = unit * total as f64;

    for prize in pool {
        let w = f64::from(prize.weight);
        if r < w {
            return Ok(prize);
        }
        r -= w;
    }

    Ok(&pool[0])
}

/// Draw one winner from `pool`; the rng is the only source of variation.
pub fn select_weighted_random<'a, R: Rng + ?Sized>(
    pool: &'a [Prize],
    rng: &mut R,
) -> Result<&'a Prize, Error> {
    let unit: f64 = rng.random();
    select_with_unit(pool, unit)
}
