//
//  reporte-client
//  interactive/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Terminal prompts used when a command is missing input.

mod prompt;

pub use prompt::*;

/// Whether prompting is possible on this terminal.
pub fn can_prompt() -> bool {
    console::user_attended()
}
