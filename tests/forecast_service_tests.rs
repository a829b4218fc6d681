use throughput_forecast::domain::team::Team;
use throughput_forecast::domain::throughput::ThroughputHistory;
use throughput_forecast::domain::work_item::WorkItem;
use throughput_forecast::services::forecast_service::{ForecastConfig, ForecastService};
use throughput_forecast::services::sampler::Sampler;

fn service(trials: usize, seed: u64) -> ForecastService<impl Sampler> {
    ForecastService::new(ForecastConfig {
        trials,
        seed: Some(seed),
    })
    .unwrap()
}

#[test]
fn how_many_distribution_covers_every_trial() {
    let mut service = service(1_000, 5);
    let history = ThroughputHistory::new(vec![0, 1, 4, 2, 0, 0, 3]);

    let forecast = service.how_many(&history, 10).unwrap();

    assert_eq!(forecast.histogram().total(), 1_000);
    assert_eq!(forecast.probability_of_at_least(0), 1.0);
    assert_eq!(forecast.probability_of_at_least(41), 0.0);
    let p50 = forecast.percentile(50).unwrap();
    let p85 = forecast.percentile(85).unwrap();
    assert!(p85 <= p50);
}

#[test]
fn same_seed_gives_the_same_forecast() {
    let history = ThroughputHistory::new(vec![0, 1, 4, 2, 0, 0, 3]);

    let first = service(500, 17).when(&history, 20).unwrap();
    let second = service(500, 17).when(&history, 20).unwrap();

    assert_eq!(first, second);
}

#[test]
fn features_of_several_teams_are_forecast_together() {
    let teams = vec![
        Team::new("Alpha", ThroughputHistory::new(vec![1]), 1),
        Team::new("Beta", ThroughputHistory::new(vec![2]), 2),
    ];
    let items = vec![
        WorkItem::new("Login").with_work("Alpha", 2, 4),
        WorkItem::new("Search")
            .with_work("Alpha", 3, 3)
            .with_work("Beta", 2, 6),
        WorkItem::new("Done").with_work("Beta", 0, 5),
    ];

    let forecasts = service(300, 23).forecast_items(&teams, &items).unwrap();

    assert_eq!(forecasts.len(), 3);
    // Alpha finishes Login on day 2, then Search on day 5; Beta's part is done on day 1.
    assert_eq!(forecasts["Login"].percentile(100), Some(2));
    assert_eq!(forecasts["Search"].probability_within(4), 0.0);
    assert_eq!(forecasts["Search"].probability_within(5), 1.0);
    assert_eq!(forecasts["Done"].probability_within(0), 1.0);
}
