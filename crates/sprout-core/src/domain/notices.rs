//! User-facing text emitted during setup.

/// Shown before repository initialization.
pub const GIT_SETUP_BANNER: &str =
    "Initializing git repository, installing dependencies, and installing pre-commit hooks...";

/// Shown when signing may ask for a passphrase during the initial commit.
pub const GPG_HINT: &str = "You will probably get prompted for your GPG key passphrase, if you have one configured. \
     If you don't have one, you should set one up!";

/// Shown when repository initialization is disabled.
pub const NO_GIT_BANNER: &str = "Installing dependencies w/o git repository initialization...";

pub const VERIFY_BANNER: &str = "Validating project with the verification tool (this WILL take a while)...";

pub const VERIFIER_UNAVAILABLE: &str = "The verification tool is not installed or is not operating correctly. \
     Please follow the template's instructions to install it.";

pub const CONTINUING_WITHOUT_VERIFICATION: &str = "Continuing without verification.";

/// Manual follow-up steps, printed once setup has finished.
pub const FOLLOW_UP: &[&str] = &[
    "Thank you for choosing this template! Please note the following:",
    "\t1. A GitHub repository has not been automatically created for you.",
    "\t   You can create one manually or use the gh CLI (far faster than the website) to create one for you.",
    "\t   https://cli.github.com/",
    "\t2. Install probot settings into your GitHub account to enable settings.yml.",
    "\t   https://probot.github.io/apps/settings/",
    "\t3. Your first CI runs will fail. This is normal. Follow all of the directions and then rerun them.",
    "Follow the rest of the instructions from cookiecutter-hypermodern-python once you have done the above.",
    "https://cookiecutter-hypermodern-python.readthedocs.io/en/2022.6.3.post1/quickstart.html#running",
];
