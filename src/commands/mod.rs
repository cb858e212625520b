mod avatar;
mod ban;
mod choose;
mod clear;
mod coinflip;
mod dice;
mod eightball;
mod embed;
mod help;
mod info;
mod kick;
mod ping;
mod poll;
mod remind;
mod say;
mod serverinfo;
mod slowmode;
mod status;
mod ticket;
mod timeout;
mod unban;
mod untimeout;
mod uptime;
mod userinfo;
mod warn;

use crate::{Data, Error};

pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![
        help::help(),
        ping::ping(),
        uptime::uptime(),
        status::status(),
        info::info(),
        serverinfo::serverinfo(),
        userinfo::userinfo(),
        avatar::avatar(),
        kick::kick(),
        ban::ban(),
        unban::unban(),
        timeout::timeout(),
        untimeout::untimeout(),
        clear::clear(),
        warn::warn(),
        slowmode::slowmode(),
        say::say(),
        embed::embed(),
        poll::poll(),
        remind::remind(),
        ticket::ticket(),
        coinflip::coinflip(),
        dice::dice(),
        choose::choose(),
        eightball::eightball(),
    ]
}
