use crate::test_helpers::factory::Factory;

#[test]
fn creates_metrics_with_defaults() {
    let metrics = Factory::metrics("c1").create();

    assert_eq!(metrics.campaign_id, "c1");
    assert_eq!(metrics.impressions, 0);
    assert_eq!(metrics.clicks, 0);
    assert_eq!(metrics.spend, 0.0);
    assert_eq!(metrics.conversions, 0);
    assert_eq!(metrics.ctr, 0.0);
    assert_eq!(metrics.cpa, None);
}

#[test]
fn creates_metrics_with_overrides() {
    let metrics = Factory::metrics("c2")
        .with_impressions(1000)
        .with_clicks(50)
        .with_spend(125.0)
        .with_conversions(5)
        .with_ctr(0.05)
        .with_cpa(25.0)
        .create();

    assert_eq!(metrics.campaign_id, "c2");
    assert_eq!(metrics.impressions, 1000);
    assert_eq!(metrics.clicks, 50);
    assert_eq!(metrics.spend, 125.0);
    assert_eq!(metrics.conversions, 5);
    assert_eq!(metrics.ctr, 0.05);
    assert_eq!(metrics.cpa, Some(25.0));
}
