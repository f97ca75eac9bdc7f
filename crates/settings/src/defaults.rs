//! The command table written to `commands.json` on first launch.

/// One record per mode except IDLE. Shortcuts follow vi conventions.
pub const DEFAULT_COMMANDS: &str = r#"[
  { "Key": "command", "Name": "Command line", "State": "COMMAND", "Shortcut": "Colon", "LongCmd": "", "Help": "Type a long command" },
  { "Key": "quit", "Name": "Quit", "State": "QUIT", "Shortcut": "Q", "LongCmd": "quit", "Help": "Close the window" },
  { "Key": "toggle-chrome", "Name": "Toggle menu bar", "State": "TOGGLE_CHROME", "Shortcut": "Ctrl+m", "LongCmd": "toggle-chrome", "Help": "Show or hide the menu bar" },
  { "Key": "open-file", "Name": "Open file", "State": "OPEN_FILE", "Shortcut": "Ctrl+o", "LongCmd": "open-file", "Help": "Open PATH, or pick a file when empty" },
  { "Key": "open-tab", "Name": "Open tab", "State": "OPEN_TAB", "Shortcut": "o", "LongCmd": "open-tab", "Help": "Open a URL or search in a new tab" },
  { "Key": "close-tab", "Name": "Close tab", "State": "CLOSE_TAB", "Shortcut": "c", "LongCmd": "close-tab", "Help": "Close tab INDEX, or the current tab" },
  { "Key": "refresh-tab", "Name": "Refresh tab", "State": "REFRESH_TAB", "Shortcut": "r", "LongCmd": "refresh-tab", "Help": "Reload tab INDEX, or the current tab" },
  { "Key": "tab-left", "Name": "Previous tab", "State": "MOVE_CURSOR_LEFT", "Shortcut": "h", "LongCmd": "tab-left", "Help": "Go COUNT tabs to the left" },
  { "Key": "tab-right", "Name": "Next tab", "State": "MOVE_CURSOR_RIGHT", "Shortcut": "l", "LongCmd": "tab-right", "Help": "Go COUNT tabs to the right" },
  { "Key": "move-tab", "Name": "Move tab", "State": "MOVE_TAB", "Shortcut": "m", "LongCmd": "move-tab", "Help": "Move the current tab to INDEX, or h/l COUNT" },
  { "Key": "search", "Name": "Search", "State": "NEW_SEARCH", "Shortcut": "s", "LongCmd": "search", "Help": "Load a URL or search in the current tab" },
  { "Key": "edit-search", "Name": "Edit search", "State": "EDIT_SEARCH", "Shortcut": "e", "LongCmd": "edit-search", "Help": "Edit the current address or query" },
  { "Key": "find", "Name": "Find", "State": "FIND", "Shortcut": "Slash", "LongCmd": "find", "Help": "Find TEXT in the page" },
  { "Key": "find-next", "Name": "Find next", "State": "FIND_NEXT", "Shortcut": "n", "LongCmd": "find-next", "Help": "Repeat the last find forwards" },
  { "Key": "find-prev", "Name": "Find previous", "State": "FIND_PREV", "Shortcut": "N", "LongCmd": "find-prev", "Help": "Repeat the last find backwards" },
  { "Key": "scroll-up", "Name": "Scroll up", "State": "SCROLL_UP", "Shortcut": "k", "LongCmd": "scroll-up", "Help": "Scroll the page up" },
  { "Key": "scroll-down", "Name": "Scroll down", "State": "SCROLL_DOWN", "Shortcut": "j", "LongCmd": "scroll-down", "Help": "Scroll the page down" },
  { "Key": "back", "Name": "Back", "State": "HISTORY_PREV", "Shortcut": "H", "LongCmd": "back", "Help": "Go back in history" },
  { "Key": "forward", "Name": "Forward", "State": "HISTORY_NEXT", "Shortcut": "L", "LongCmd": "forward", "Help": "Go forward in history" }
]
"#;
