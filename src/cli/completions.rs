use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    fuibind completions bash > ~/.bash_completion.d/fuibind\n\n\
                  Generate zsh completions:\n    fuibind completions zsh > ~/.zfunc/_fuibind\n\n\
                  Generate fish completions:\n    fuibind completions fish > ~/.config/fish/completions/fuibind.fish\n\n\
                  Generate PowerShell completions:\n    fuibind completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
