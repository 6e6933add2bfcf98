use crate::generate;
use crate::quiz::{QuizPhase, QuizSession};
use crate::types::Quiz;
use crate::views::shared::{Toast, show_toast};
use dioxus::prelude::*;

#[component]
pub fn QuizView(toast: Signal<Option<Toast>>) -> Element {
    let quizzes = use_signal(generate::fetch_quizzes);
    let session = use_signal(|| Option::<QuizSession>::None);
    let loading = use_signal(|| false);

    let request_quiz = {
        let mut quizzes = quizzes;
        let mut loading_signal = loading;
        move |document_id: String| {
            if loading_signal() {
                return;
            }
            loading_signal.set(true);
            spawn(async move {
                match generate::generate_quiz(&document_id).await {
                    Ok(quiz) => {
                        quizzes.with_mut(|list| list.push(quiz));
                        show_toast(
                            toast,
                            Toast::info("Quiz Generated!", "Your quiz has been created successfully."),
                        );
                    }
                    Err(err) => {
                        show_toast(
                            toast,
                            Toast::error("Error", format!("Failed to generate quiz: {err}")),
                        );
                    }
                }
                loading_signal.set(false);
            });
        }
    };

    let current = session();

    match current {
        Some(active) => match active.phase() {
            QuizPhase::Idle => rsx! {
                QuizPicker { quizzes, session, loading, request_quiz }
            },
            QuizPhase::InProgress { index } => rsx! {
                QuestionCard { session, index }
            },
            QuizPhase::Completed { score } => rsx! {
                ResultCard { session, score }
            },
        },
        None => rsx! {
            QuizPicker { quizzes, session, loading, request_quiz }
        },
    }
}

#[component]
fn QuizPicker(
    quizzes: Signal<Vec<Quiz>>,
    session: Signal<Option<QuizSession>>,
    loading: Signal<bool>,
    request_quiz: EventHandler<String>,
) -> Element {
    let list = quizzes();
    let busy = loading();
    rsx! {
        div { class: "main-container",
            div { class: "view-heading",
                div {
                    h2 { "Knowledge Quizzes" }
                    p { class: "text-muted", "Test your understanding with AI-generated quizzes" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| request_quiz.call("sample-doc".to_string()),
                    if busy { "Generating…" } else { "Generate New Quiz" }
                }
            }
            if list.is_empty() {
                div { class: "card empty-state",
                    div { class: "empty-glyph", "\u{1F9E0}" }
                    h3 { "No Quizzes Yet" }
                    p { class: "text-muted", "Generate your first quiz from uploaded documents" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: busy,
                        onclick: move |_| request_quiz.call("sample-doc".to_string()),
                        "Create Your First Quiz"
                    }
                }
            } else {
                div { class: "card-grid three-columns",
                    for quiz in list.iter().cloned() {
                        div { class: "card quiz-card", key: "{quiz.id}",
                            h3 { "{quiz.title}" }
                            p { class: "text-muted", "{quiz.description}" }
                            div { class: "hstack",
                                span { class: "badge", "{quiz.questions.len()} Questions" }
                                span { class: "badge outline", "AI Generated" }
                            }
                            p { class: "text-faint", "Based on: {quiz.source_document}" }
                            button {
                                class: "btn btn-primary full-width",
                                r#type: "button",
                                onclick: {
                                    let mut session = session;
                                    move |_| {
                                        let mut play = QuizSession::new(quiz.clone());
                                        play.start();
                                        session.set(Some(play));
                                    }
                                },
                                "Start Quiz"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionCard(session: Signal<Option<QuizSession>>, index: usize) -> Element {
    let Some(active) = session() else {
        return rsx! {};
    };
    let total = active.quiz().questions.len();
    let Some(question) = active.quiz().questions.get(index).cloned() else {
        return rsx! {};
    };
    let selected = active.selected();
    let progress = active.progress_percent();
    let question_number = index + 1;
    let is_last = question_number == total;

    rsx! {
        div { class: "main-container",
            div { class: "view-heading",
                div {
                    h2 { {active.quiz().title.clone()} }
                    p { class: "text-muted", "Question {question_number} of {total}" }
                }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: {
                        let mut session = session;
                        move |_| {
                            session.with_mut(|slot| {
                                if let Some(play) = slot {
                                    play.reset();
                                }
                            });
                            session.set(None);
                        }
                    },
                    "Exit Quiz"
                }
            }

            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {progress}%;" }
            }

            div { class: "card",
                h3 { "{question.question}" }
                div { class: "option-list",
                    for (option_index, option) in question.options.iter().cloned().enumerate() {
                        button {
                            key: "{option_index}",
                            class: format_args!(
                                "option-row {}",
                                if selected == Some(option_index) { "selected" } else { "" }
                            ),
                            r#type: "button",
                            onclick: {
                                let mut session = session;
                                move |_| {
                                    session.with_mut(|slot| {
                                        if let Some(play) = slot {
                                            play.select_answer(option_index);
                                        }
                                    });
                                }
                            },
                            "{option}"
                        }
                    }
                }
                div { class: "card-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: selected.is_none(),
                        onclick: {
                            let mut session = session;
                            move |_| {
                                session.with_mut(|slot| {
                                    if let Some(play) = slot {
                                        play.advance();
                                    }
                                });
                            }
                        },
                        if is_last { "Finish Quiz" } else { "Next Question" }
                    }
                }
            }
        }
    }
}

#[component]
fn ResultCard(session: Signal<Option<QuizSession>>, score: usize) -> Element {
    let Some(active) = session() else {
        return rsx! {};
    };
    let total = active.quiz().questions.len();
    let percentage = active.score_percent().unwrap_or(0);
    let answers = active.answers().to_vec();
    let questions = active.quiz().questions.clone();

    rsx! {
        div { class: "main-container",
            div { class: "card result-card",
                div { class: "empty-glyph", "\u{1F3C6}" }
                h2 { "Quiz Completed!" }
                div { class: "score-value", "{percentage}%" }
                p { class: "text-muted", "You scored {score} out of {total} questions correctly" }

                div { class: "card-stack",
                    for (question_index, question) in questions.iter().enumerate() {
                        {
                            let user_answer = answers.get(question_index).copied();
                            let is_correct = user_answer == Some(question.correct_answer);
                            let your_answer = user_answer
                                .and_then(|a| question.options.get(a))
                                .cloned()
                                .unwrap_or_else(|| "—".to_string());
                            let correct_answer = question
                                .options
                                .get(question.correct_answer)
                                .cloned()
                                .unwrap_or_default();
                            rsx! {
                                div { class: "card review-row", key: "{question.id}",
                                    span {
                                        class: format_args!(
                                            "review-mark {}",
                                            if is_correct { "correct" } else { "incorrect" }
                                        ),
                                        if is_correct { "\u{2713}" } else { "\u{2717}" }
                                    }
                                    div { class: "review-body",
                                        p { class: "file-name", "{question.question}" }
                                        p { class: "text-muted", "Your answer: {your_answer}" }
                                        if !is_correct {
                                            p { class: "review-correct", "Correct answer: {correct_answer}" }
                                        }
                                        p { class: "text-muted", "{question.explanation}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "card-actions centered",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: {
                            let mut session = session;
                            move |_| {
                                session.with_mut(|slot| {
                                    if let Some(play) = slot {
                                        play.start();
                                    }
                                });
                            }
                        },
                        "Retake Quiz"
                    }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: {
                            let mut session = session;
                            move |_| session.set(None)
                        },
                        "Back to Quizzes"
                    }
                }
            }
        }
    }
}
