/// Usage text printed by `help`, and when no command is recognized.
pub const USAGE: &str = "\
usage: cher <command> [<args>]
commands:
  init | i          initialize cher and choose a text editor
  help | h          show this help message
  add <lang>...     compose .editorconfig in the current directory from snippets
  new <lang>...     create a new snippet for each language in the editor
  remove <lang>     delete a snippet
  edit <lang>       open a snippet in the editor
  list              list configured languages
";
