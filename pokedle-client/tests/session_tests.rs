
use pokedle_client::terminal::render_page;
use pokedle_client::{GameSession, GuessApi, SubmitOutcome};
use pokedle_core::{Locale, PresenterState};
use pokedle_types::{SubmitFailure, Tone};
use test_helpers::*;

#[tokio::test]
async fn test_full_game_over_http() {
    let (base_url, game) = spawn_fake_server().await;
    let mut session = GameSession::new(
        create_api(&base_url),
        PresenterState::with_preferred_language(Locale::En, "fr"),
    );

    // Nothing unlocked before the first guess
    assert!(session.refresh_hints().await);
    assert!(session.state().panel().is_empty());

    let outcome = session.submit("missingno").await;
    assert_eq!(
        outcome,
        SubmitOutcome::Failed(SubmitFailure::Rejected {
            message: Some("Unknown Pokémon name".to_string())
        })
    );
    assert_eq!(session.state().status(), "Unknown Pokémon name");
    assert_eq!(game.hint_fetches(), 1);

    for guess in ["Bulbasaur", "charmander"] {
        assert_eq!(
            session.submit(guess).await,
            SubmitOutcome::Accepted { won: false }
        );
    }
    assert_eq!(
        session.state().status(),
        "Attempt #2. 1 more guess(es) before Hint #1."
    );
    assert!(session.state().panel().description.is_none());

    assert_eq!(
        session.submit("raichu").await,
        SubmitOutcome::Accepted { won: false }
    );
    assert_eq!(
        session.state().status(),
        "Attempt #3. 3 more guess(es) before Hint #2."
    );
    let description = session.state().panel().description.clone().unwrap();
    assert_eq!(description.selected_language(), Some("fr"));
    assert!(description.has_toggle());

    let raichu = &session.state().guesses()[0];
    assert_eq!(raichu.title, "#26 — raichu");
    let texts: Vec<&str> = raichu.badges.iter().map(|b| b.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["electric", "", ">1G", "<30kg", "<0.8m", "LVL 2", "fully evolved"]
    );

    assert_eq!(
        session.submit("pachirisu").await,
        SubmitOutcome::Accepted { won: true }
    );
    let state = session.state();
    assert_eq!(state.guesses().len(), 4);
    assert!(state.guesses()[0].badges.iter().all(|b| b.tone == Tone::Ok));
    assert!(!state.accepts_input());
    assert!(state.form().is_hidden());
    assert_eq!(state.revealed().map(|r| r.name.as_str()), Some(TARGET_NAME));

    let page = render_page(state);
    assert!(page.contains("(game over)"));
    assert!(page.contains("Congrats! The Pokémon of the day was #417 — pachirisu."));

    let requests = game.requests();
    assert_eq!(requests.len(), 5);
    assert!(requests.iter().all(|r| r.lang.as_deref() == Some("fr")));
    // one refresh up front plus one per accepted guess
    assert_eq!(game.hint_fetches(), 5);
}

#[tokio::test]
async fn test_server_error_is_a_network_failure() {
    let base_url = spawn_failing_server().await;
    let mut session = GameSession::new(create_api(&base_url), PresenterState::default());

    assert_eq!(
        session.submit("pikachu").await,
        SubmitOutcome::Failed(SubmitFailure::Network)
    );
    assert_eq!(session.state().status(), "Network error.");
    assert!(session.state().guesses().is_empty());
    assert!(session.state().accepts_input());
    assert!(!session.refresh_hints().await);
}

#[tokio::test]
async fn test_rejection_with_error_status_shows_server_message() {
    let base_url = spawn_rejecting_server("Game already won").await;
    let mut session = GameSession::new(create_api(&base_url), PresenterState::default());

    assert_eq!(
        session.submit("pikachu").await,
        SubmitOutcome::Failed(SubmitFailure::Rejected {
            message: Some("Game already won".to_string())
        })
    );
    assert_eq!(session.state().status(), "Game already won");
    assert!(session.state().guesses().is_empty());
}

#[tokio::test]
async fn test_unreachable_server() {
    // Grab a free port, then close it so nothing is listening
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let api = create_api(&format!("http://{}", addr));
    assert!(api.fetch_hints().await.is_err());

    let mut session = GameSession::new(api, PresenterState::new(Locale::Fr));
    assert_eq!(
        session.submit("pikachu").await,
        SubmitOutcome::Failed(SubmitFailure::Network)
    );
    assert_eq!(session.state().status(), "Erreur réseau.");
}
