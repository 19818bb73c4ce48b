//! End-to-end behaviour of the three dashboard components.

use kaddex_dashboard::components::{VoteHandler, VoteResultsContainer, VoteSide};
use kaddex_dashboard::navigation::ROUTE_LIQUIDITY_TOKENS;
use kaddex_dashboard::render::TerminalTableRenderer;
use kaddex_dashboard::{
    aggregate_token_rows, default_catalog, Account, AccountSession, ChartSegment,
    HistoryNavigator, LiquidityTokensTable, PairRecord, ProposalVoteData, StackedBarChart,
    StaticDataService, TableState, TokenCatalog, TokenPrices, TokenRecord, VolumeDataset,
    VoteChoice,
};
use std::time::Duration;

fn kda_usd_catalog() -> TokenCatalog {
    TokenCatalog::from_tokens(vec![
        TokenRecord::new("KDA", "coin", "coin", "Ⓚ"),
        TokenRecord::new("USD", "lago.USD2", "lago.USD2", "$").usd_stable(),
    ])
    .unwrap()
}

fn kda_volumes() -> VolumeDataset {
    serde_json::from_str(
        r#"[
            {"day": "2022-06-02", "chain": 2, "volumes": [
                {"tokenFromNamespace": null, "tokenFromName": "coin",
                 "tokenToNamespace": "lago", "tokenToName": "USD2",
                 "tokenFromVolume": 999.0, "tokenToVolume": 1.0}
            ]},
            {"day": "2022-06-03T00:00:00Z", "chain": 2, "volumes": [
                {"tokenFromNamespace": null, "tokenFromName": "coin",
                 "tokenToNamespace": "lago", "tokenToName": "USD2",
                 "tokenFromVolume": 20.0, "tokenToVolume": 10.0}
            ]}
        ]"#,
    )
    .unwrap()
}

// ============================================================================
// Liquidity table
// ============================================================================

#[test]
fn test_kda_row_from_explicit_price() {
    let pairs = vec![PairRecord::new("KDA", "USD", [100.0, 50.0])];
    let prices: TokenPrices = [("KDA".to_string(), 0.5)].into_iter().collect();

    let rows = aggregate_token_rows(&kda_usd_catalog(), &pairs, &kda_volumes(), &prices);
    let kda = &rows[0];
    assert_eq!(kda.name(), "KDA");
    assert_eq!(kda.liquidity, 100.0);
    assert_eq!(kda.liquidity_usd, Some(50.0));
    // Only the latest day counts
    assert_eq!(kda.volume_24h, 20.0);
    assert_eq!(kda.volume_24h_usd, Some(10.0));
}

#[tokio::test]
async fn test_table_mount_derives_prices() {
    let service = StaticDataService::new(
        vec![PairRecord::new("KDA", "USD", [100.0, 50.0])],
        kda_volumes(),
    );
    let mut table = LiquidityTokensTable::new(service, kda_usd_catalog());
    table.mount().await;

    let rows = table.rows().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].liquidity_usd, Some(50.0));
    // 10 USD of volume against 100 USD of pool liquidity
    assert!(rows[0].apr > 0.0);

    let usd = &rows[1];
    assert_eq!(usd.liquidity, 50.0);
    assert_eq!(usd.liquidity_usd, Some(50.0));

    let rendered = table.table_view().unwrap().render(&TerminalTableRenderer);
    assert!(rendered.contains("KDA"));
    assert!(rendered.contains("Gasless"));
    assert!(rendered.contains("Coming Soon"));
}

#[tokio::test]
async fn test_row_action_targets_single_sided_route() {
    let service = StaticDataService::new(vec![], VolumeDataset::default());
    let mut table = LiquidityTokensTable::new(service, default_catalog());
    table.mount().await;

    let mut navigator = HistoryNavigator::new();
    let request = table.select_row(1, &mut navigator).unwrap();
    assert_eq!(request.query_param("token0"), Some("KDX"));
    assert_eq!(request.state.from.as_deref(), Some(ROUTE_LIQUIDITY_TOKENS));
    assert_eq!(navigator.current(), Some(&request));
    assert!(table.select_row(99, &mut navigator).is_err());
}

#[tokio::test]
async fn test_unreachable_service_does_not_hang() {
    let policy = kaddex_dashboard::FetchPolicy::no_retry(Duration::from_millis(100));
    let mut table =
        LiquidityTokensTable::new(StaticDataService::failing(), default_catalog()).with_policy(policy);
    let state = table.mount().await;
    match state {
        TableState::Failed(err) => assert!(err.is_service_error()),
        other => panic!("Expected Failed, got {:?}", other),
    }
}

// ============================================================================
// Vote results
// ============================================================================

#[derive(Default)]
struct Clicks(Vec<VoteSide>);

impl VoteHandler for Clicks {
    fn on_click_yes(&mut self) {
        self.0.push(VoteSide::Yes);
    }
    fn on_click_no(&mut self) {
        self.0.push(VoteSide::No);
    }
}

#[test]
fn test_vote_checked_states() {
    let data: ProposalVoteData =
        serde_json::from_str(r#"{"tot-approved": {"decimal": "30.0"}, "tot-refused": 10}"#).unwrap();
    let session = AccountSession::with_account(Account::new("k:alice").unwrap());

    let cases = [
        (VoteChoice::from_optional(Some("approved")), true, false),
        (VoteChoice::from_optional(Some("refused")), false, true),
        (VoteChoice::from_optional(None), false, false),
    ];
    for (choice, yes, no) in cases {
        let view = VoteResultsContainer::new(&data, choice, &session).view();
        assert_eq!(view.yes.checked, yes);
        assert_eq!(view.no.checked, no);
    }

    let container = VoteResultsContainer::new(&data, VoteChoice::Unset, &session);
    assert_eq!(container.approved_ratio(), 0.75);
    assert_eq!(container.refused_ratio(), 0.25);
}

#[test]
fn test_vote_requires_account() {
    let data = ProposalVoteData::new(5.0, 5.0);
    let mut session = AccountSession::new();
    let mut clicks = Clicks::default();

    {
        let container = VoteResultsContainer::new(&data, VoteChoice::Unset, &session);
        assert!(container.is_disabled());
        assert!(container.select(VoteSide::Yes, &mut clicks).is_err());
    }

    session.login(Account::new("k:alice").unwrap());
    let container = VoteResultsContainer::new(&data, VoteChoice::Unset, &session);
    container.select(VoteSide::Yes, &mut clicks).unwrap();
    assert_eq!(clicks.0, vec![VoteSide::Yes]);
}

// ============================================================================
// Stacked bar chart
// ============================================================================

#[test]
fn test_hover_a_then_b_then_leave() {
    let mut chart = StackedBarChart::new(
        "Volume",
        vec![
            ChartSegment::new("A", 60.0, 600.0),
            ChartSegment::new("B", 40.0, 400.0),
        ],
    );

    chart.on_mouse_enter("A");
    let tip = chart.tooltip().unwrap();
    assert_eq!((tip.name.as_str(), tip.volume.as_str()), ("A", "$ 600.00"));

    chart.on_mouse_enter("B");
    let tip = chart.tooltip().unwrap();
    assert_eq!((tip.name.as_str(), tip.percentage.as_str()), ("B", "40.00 %"));

    chart.on_mouse_leave();
    assert!(chart.tooltip().is_none());
}

#[test]
fn test_chart_segments_from_json() {
    let segments: Vec<ChartSegment> = serde_json::from_str(
        r##"[{"name": "KDA", "percentage": 70, "volumeUsd": 7000, "color": "#FF0000"},
             {"name": "KDX", "percentage": 30, "volumeUsd": 3000}]"##,
    )
    .unwrap();
    let chart = StackedBarChart::new("Volume", segments);
    let layout = chart.layout(100.0);
    assert_eq!(layout[0].color, "#FF0000");
    assert_eq!(layout[1].color, "#A9AAB4");
    assert!(layout[0].corners.left && layout[1].corners.right);
}
