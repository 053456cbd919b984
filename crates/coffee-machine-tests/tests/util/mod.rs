use coffee_machine_core::CoffeeReady;
use coffee_machine_tests::{Api, Brew};
use eyre::Result;

/// Brew once and require a 200, returning the decoded body.
#[allow(unused)]
pub async fn brew_ready(api: &Api) -> Result<CoffeeReady> {
    match api.brew_coffee().await?.result? {
        Brew::Ready(body) => Ok(body),
        other => eyre::bail!("expected coffee, got {other:?}"),
    }
}

/// Run `total` sequential brews and return the outcomes in call order.
#[allow(unused)]
pub async fn brew_sequence(api: &Api, total: u64) -> Result<Vec<Brew>> {
    let mut outcomes = Vec::with_capacity(total as usize);
    for _ in 0..total {
        outcomes.push(api.brew_coffee().await?.result?);
    }
    Ok(outcomes)
}
