//! End-to-end runs over the bundled content: full game rounds, lesson and
//! safety progress, and the 12-star session ceiling.

use std::time::Duration;

use aiquest::content::ContentPack;
use aiquest::games::matching::MatchEngine;
use aiquest::games::quiz::QuizEngine;
use aiquest::games::sorting::{Bucket, SortEngine};
use aiquest::games::{ActiveGame, GameKind};
use aiquest::session::KidSession;

fn pack() -> ContentPack {
    ContentPack::load().expect("bundled content must load")
}

/// Answer every question with the canonical correct option, firing each
/// advance immediately.
fn ace_quiz(quiz: &mut QuizEngine, session: &mut KidSession) {
    let total = quiz.len();
    for _ in 0..total {
        let correct = quiz.question().correct;
        let token = quiz.select_answer(correct).expect("answer accepted");
        quiz.advance(token, &mut session.stars);
    }
    assert!(quiz.is_complete());
}

#[test]
fn quiz_round_with_three_correct_earns_a_star() {
    let pack = pack();
    let mut session = KidSession::new(&pack);
    let mut quiz = QuizEngine::new(pack.questions.clone(), Duration::ZERO);

    // correct, correct, correct, wrong, wrong
    for i in 0..5 {
        let right = quiz.question().correct;
        let pick = if i < 3 { right } else { (right + 1) % 4 };
        let token = quiz.select_answer(pick).unwrap();
        quiz.advance(token, &mut session.stars);
    }

    assert!(quiz.is_complete());
    assert_eq!(quiz.score(), 3);
    assert!(quiz.rewarded());
    assert_eq!(session.stars.stars(), 1);
}

#[test]
fn quiz_round_with_two_correct_earns_nothing() {
    let pack = pack();
    let mut session = KidSession::new(&pack);
    let mut quiz = QuizEngine::new(pack.questions.clone(), Duration::ZERO);

    for i in 0..5 {
        let right = quiz.question().correct;
        let pick = if i < 2 { right } else { (right + 1) % 4 };
        let token = quiz.select_answer(pick).unwrap();
        quiz.advance(token, &mut session.stars);
    }

    assert_eq!(quiz.score(), 2);
    assert!(!quiz.rewarded());
    assert_eq!(session.stars.stars(), 0);
}

#[test]
fn match_round_with_one_swap_scores_three_of_five() {
    let pack = pack();
    let mut session = KidSession::new(&pack);
    let mut game = MatchEngine::new(pack.pairs.clone());

    // 0→1, 1→0, rest identity
    game.select_term(0);
    game.select_definition(1, &mut session.stars);
    game.select_term(1);
    game.select_definition(0, &mut session.stars);
    for i in 2..5 {
        game.select_term(i);
        game.select_definition(i, &mut session.stars);
    }

    assert!(game.is_complete());
    assert_eq!(game.correct_count(), 3);
    assert!(!game.rewarded());
    assert_eq!(session.stars.stars(), 0);
}

#[test]
fn sort_round_true_buckets_scores_ten_of_ten() {
    let pack = pack();
    let mut session = KidSession::new(&pack);
    let mut game = SortEngine::new(pack.sort_items.clone());

    for (i, item) in pack.sort_items.iter().enumerate() {
        let bucket = if item.safe { Bucket::Safe } else { Bucket::Unsafe };
        game.classify(i, bucket, &mut session.stars);
    }

    assert!(game.is_complete());
    assert_eq!(game.correct_count(), 10);
    assert!(game.rewarded());
    assert_eq!(session.stars.stars(), 1);
}

#[test]
fn stars_are_monotone_across_a_messy_session() {
    let pack = pack();
    let mut session = KidSession::new(&pack);
    let mut seen = 0;

    // A lesson, a failed quiz, a perfect sort, a wrong safety answer.
    session.lessons.complete_and_advance(&mut session.stars);
    assert!(session.stars.stars() >= seen);
    seen = session.stars.stars();

    let mut quiz = QuizEngine::new(pack.questions.clone(), Duration::ZERO);
    for _ in 0..5 {
        let wrong = (quiz.question().correct + 1) % 4;
        let token = quiz.select_answer(wrong).unwrap();
        quiz.advance(token, &mut session.stars);
    }
    assert!(session.stars.stars() >= seen);
    seen = session.stars.stars();

    let mut sort = SortEngine::new(pack.sort_items.clone());
    for (i, item) in pack.sort_items.iter().enumerate() {
        let bucket = if item.safe { Bucket::Safe } else { Bucket::Unsafe };
        sort.classify(i, bucket, &mut session.stars);
    }
    assert!(session.stars.stars() >= seen);
    seen = session.stars.stars();

    let wrong_option = session
        .safety
        .topic()
        .check
        .options
        .iter()
        .position(|o| !o.correct)
        .unwrap();
    session.safety.answer(wrong_option, &mut session.stars);
    assert!(session.stars.stars() >= seen);

    // Lesson star + sort star, nothing from the failed quiz or wrong answer.
    assert_eq!(session.stars.stars(), 2);
}

#[test]
fn perfect_session_reaches_the_twelve_star_goal_exactly_once() {
    let pack = pack();
    let mut session = KidSession::new(&pack);

    // All four lessons.
    for _ in 0..pack.lessons.len() {
        session.lessons.complete_and_advance(&mut session.stars);
    }
    // All five safety checks, answered right first time.
    for i in 0..pack.safety_topics.len() {
        session.safety.goto(i);
        let right = session
            .safety
            .topic()
            .check
            .options
            .iter()
            .position(|o| o.correct)
            .unwrap();
        session.safety.answer(right, &mut session.stars);
    }
    // All three games, played perfectly.
    let mut quiz = QuizEngine::new(pack.questions.clone(), Duration::ZERO);
    ace_quiz(&mut quiz, &mut session);

    let mut matching = MatchEngine::new(pack.pairs.clone());
    for i in 0..pack.pairs.len() {
        matching.select_term(i);
        matching.select_definition(i, &mut session.stars);
    }
    let mut sort = SortEngine::new(pack.sort_items.clone());
    for (i, item) in pack.sort_items.iter().enumerate() {
        let bucket = if item.safe { Bucket::Safe } else { Bucket::Unsafe };
        sort.classify(i, bucket, &mut session.stars);
    }

    assert_eq!(session.stars.stars(), session.star_goal());
    assert_eq!(session.stars.stars(), 12);

    // Replaying the same content in the same session cannot re-earn the
    // lesson or safety stars; only fresh game rounds can add more.
    for i in 0..pack.lessons.len() {
        session.lessons.goto(i);
        session.lessons.complete_and_advance(&mut session.stars);
    }
    for i in 0..pack.safety_topics.len() {
        session.safety.goto(i);
        session.safety.answer(0, &mut session.stars);
    }
    assert_eq!(session.stars.stars(), 12);
}

#[test]
fn selector_always_hands_out_fresh_engines() {
    let pack = pack();
    let mut session = KidSession::new(&pack);
    let delay = Duration::ZERO;

    // Play a full quiz through the selector, then re-enter: the new engine
    // must start from scratch.
    let mut game = ActiveGame::start(GameKind::Quiz, &pack, delay);
    if let ActiveGame::Quiz(ref mut quiz) = game {
        ace_quiz(quiz, &mut session);
    }
    let summary = game.summary().expect("complete game has a summary");
    assert_eq!(summary.game, GameKind::Quiz);
    assert_eq!(summary.correct, 5);
    assert!(summary.rewarded);
    session.record(summary);

    let fresh = ActiveGame::start(GameKind::Quiz, &pack, delay);
    assert!(!fresh.is_complete());
    assert!(fresh.summary().is_none());
    if let ActiveGame::Quiz(quiz) = fresh {
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.current_index(), 0);
    }

    assert_eq!(session.log.len(), 1);
}

#[test]
fn in_progress_game_has_no_summary() {
    let pack = pack();
    let game = ActiveGame::start(GameKind::Sort, &pack, Duration::ZERO);
    assert!(!game.is_complete());
    assert!(game.summary().is_none());
}
