//! Console rendering
//!
//! Everything here is read-only: state goes in, formatted text comes
//! out. The session decides where the text is written.

use crate::combat::resolution::{BattleReport, BattleWinner};
use crate::core::config::{OPTION_ATTACK, OPTION_CHECK_MISSION, OPTION_EXIT};
use crate::map::world_map::WorldMap;
use crate::mission::Mission;

/// Fixed-width table of the whole map, IDs numbered from 1
pub fn map_table(map: &WorldMap) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n--- CURRENT MAP (ID: 1 to {}) ---\n",
        map.len()
    ));
    out.push_str(&format!(
        "| {:<2} | {:<20} | {:<15} | {:<10} |\n",
        "ID", "TERRITORY", "ARMY", "TROOPS"
    ));
    out.push_str("|----|----------------------|-----------------|------------|\n");

    for (index, territory) in map.territories().iter().enumerate() {
        out.push_str(&format!(
            "| {:<2} | {:<20} | {:<15} | {:<10} |\n",
            index + 1,
            territory.name,
            territory.owner_color,
            territory.troops
        ));
    }

    out.push_str("|----|----------------------|-----------------|------------|\n");
    out
}

/// The static action menu
pub fn action_menu() -> String {
    format!(
        "\n--- ACTION MENU ---\n\
         {}. Start attack phase\n\
         {}. Check mission\n\
         {}. Leave the game\n",
        OPTION_ATTACK, OPTION_CHECK_MISSION, OPTION_EXIT
    )
}

/// The secret-mission line shown every turn
pub fn mission_banner(mission: &Mission) -> String {
    format!("Secret mission: {}", mission.description())
}

/// Narrate a resolved battle from its report
pub fn battle_narration(report: &BattleReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\nBATTLE: {} ({}) vs {} ({})\n",
        report.attacker_name, report.attacker_color, report.defender_name, report.defender_color
    ));
    out.push_str(&format!(
        "   Dice: attacker ({}) vs defender ({})\n",
        report.attacker_roll, report.defender_roll
    ));

    match report.winner {
        BattleWinner::Attacker => {
            out.push_str(&format!(
                "   The ATTACKER takes the exchange! {} loses 1 troop.\n",
                report.defender_name
            ));
        }
        BattleWinner::Defender => {
            out.push_str(&format!(
                "   The DEFENDER holds! {} loses 1 troop.\n",
                report.attacker_name
            ));
        }
    }

    if let Some(conquest) = &report.conquest {
        out.push_str(&format!(
            "\nCONQUEST! {} now fights for {}.\n",
            conquest.territory, conquest.new_owner
        ));
        out.push_str(&format!(
            "   One troop moved from {} to {}.\n",
            report.attacker_name, conquest.territory
        ));
    }

    out.push_str("-------------------------------------------\n");
    out
}

pub fn victory_banner() -> String {
    "\nCONGRATULATIONS! MISSION ACCOMPLISHED!\n".to_string()
}

pub fn mission_incomplete() -> String {
    "\nThe mission is NOT complete yet. Keep attacking!\n".to_string()
}
