use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub wordmark_class: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            wordmark_class: "header-wordmark",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            wordmark_class: "header-wordmark header-wordmark-light",
        },
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0b0614;
    --color-bg-secondary: #140b24;
    --color-bg-overlay: rgba(11, 6, 20, 0.92);
    --color-text-primary: #ffffff;
    --color-text-muted: #9ca3af;
    --color-border: rgba(139, 92, 246, 0.25);
    --color-surface-muted: rgba(255, 255, 255, 0.06);
    --color-input-border: rgba(139, 92, 246, 0.35);
    --color-input-bg: rgba(255, 255, 255, 0.08);
    --color-neural-node: hsl(280, 80%, 60%);
    --color-neural-connection: hsl(263, 70%, 50.4%);
    --color-neural-highlight: hsl(320, 90%, 70%);
    --color-chat-user-bg: hsl(280, 80%, 60%);
    --color-chat-user-text: #ffffff;
    --color-chat-ai-bg: rgba(255, 255, 255, 0.1);
    --color-chat-ai-text: #ffffff;
    --color-card-bg: rgba(20, 11, 36, 0.6);
    --color-timestamp: #9b9b9b;
    --color-success: #34d399;
    --color-danger: #f87171;
    --color-shimmer-base: rgba(139, 92, 246, 0.25);
    --color-shimmer-highlight: hsl(280, 80%, 60%);
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-overlay); border-bottom: 1px solid var(--color-border); }
.btn:hover,
.btn-ghost:hover { background: var(--color-surface-muted); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus { border-color: var(--color-neural-node); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #faf8ff;
    --color-bg-secondary: #f0eafc;
    --color-bg-overlay: rgba(250, 248, 255, 0.92);
    --color-text-primary: #17102a;
    --color-text-muted: #5b5470;
    --color-border: rgba(124, 58, 237, 0.3);
    --color-surface-muted: rgba(124, 58, 237, 0.08);
    --color-input-border: rgba(124, 58, 237, 0.35);
    --color-input-bg: #ffffff;
    --color-neural-node: hsl(272, 70%, 46%);
    --color-neural-connection: hsl(263, 70%, 42%);
    --color-neural-highlight: hsl(320, 80%, 52%);
    --color-chat-user-bg: hsl(272, 70%, 46%);
    --color-chat-user-text: #ffffff;
    --color-chat-ai-bg: rgba(124, 58, 237, 0.08);
    --color-chat-ai-text: #17102a;
    --color-card-bg: rgba(255, 255, 255, 0.8);
    --color-timestamp: #6b6480;
    --color-success: #059669;
    --color-danger: #dc2626;
    --color-shimmer-base: rgba(124, 58, 237, 0.2);
    --color-shimmer-highlight: hsl(272, 70%, 46%);
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-overlay); border-bottom: 1px solid var(--color-border); }
.btn:hover,
.btn-ghost:hover { background: var(--color-surface-muted); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus { border-color: var(--color-neural-node); }
"#;
