//! Concurrency tests: parallel clients must observe the exact 503 cadence

use coffee_machine_core::HOT_COFFEE_MESSAGE;
use coffee_machine_tests::{Brew, TestCtxBuilder};
use eyre::Result;
use futures::future;

mod util;

#[tokio::test]
#[ntest::timeout(40_000)]
async fn concurrent_brews_follow_the_cadence_exactly() -> Result<()> {
    const TOTAL: usize = 200;

    let ctx = TestCtxBuilder::new().with_handler_threads(4).build().await?;

    // one API handle per handler thread; cloning advances the channel index
    let mut fan = Vec::with_capacity(ctx.handler_threads as usize);
    let mut api = ctx.api.clone();
    for _ in 0..ctx.handler_threads {
        fan.push(api.clone());
        api = api.clone();
    }

    let calls = (0..TOTAL).map(|i| {
        let api = &fan[i % fan.len()];
        async move { api.brew_coffee().await }
    });
    let responses = future::join_all(calls).await;

    // which call "wins" a given counter value is racy, but the totals are not:
    // the counter hands out exactly 1..=TOTAL, so exactly TOTAL / 5 of the
    // values are multiples of 5
    let mut ready = 0;
    let mut unavailable = 0;
    for response in responses {
        match response?.result? {
            Brew::Ready(body) => {
                assert_eq!(body.message, HOT_COFFEE_MESSAGE);
                ready += 1;
            }
            Brew::Unavailable => unavailable += 1,
            Brew::Teapot => panic!("no brew may be answered with 418 outside April 1"),
        }
    }
    assert_eq!(unavailable, TOTAL / 5);
    assert_eq!(ready, TOTAL - TOTAL / 5);

    // Drop every API handle before shutting down: the handler threads loop
    // over their receivers until all senders disconnect, so `finish()` can
    // only join them once no `Api` clone is left holding a channel open.
    drop(fan);
    drop(api);
    ctx.finish().await;
    Ok(())
}
