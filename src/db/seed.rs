/// Starter tip library: (title, content, category)
pub const STARTER_TIPS: &[(&str, &str, Option<&str>)] = &[
    (
        "Use long passphrases",
        "Length beats complexity: a passphrase of four or more random words is easier to remember and harder to crack than a short jumble of symbols.",
        Some("basic"),
    ),
    (
        "Never reuse passwords",
        "Use a unique password for every account so a single breach cannot unlock the rest of your accounts.",
        Some("basic"),
    ),
    (
        "Use a password manager",
        "A password manager generates and stores strong random passwords, so you only have to remember one master passphrase.",
        Some("storage"),
    ),
    (
        "Enable two-factor authentication",
        "Turn on a second factor such as an authenticator app or hardware key wherever a service offers it.",
        Some("advanced"),
    ),
    (
        "Watch out for phishing",
        "Check the address bar before typing a password. Legitimate services never ask for your password by email or phone.",
        Some("phishing"),
    ),
    (
        "Avoid personal information",
        "Birthdays, pet names and favourite teams are easy to guess from social media and should not appear in passwords.",
        Some("basic"),
    ),
    (
        "Change breached passwords immediately",
        "If a service you use reports a breach, change that password right away and anywhere you may have reused it.",
        Some("advanced"),
    ),
    (
        "Lock your devices",
        "A strong screen lock protects the credentials saved in your browser if your phone or laptop is lost.",
        None,
    ),
];
