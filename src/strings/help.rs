//! # Help Text
//!
//! Detailed help message for bot commands.
//! Displayed to the user via the `help` command.

pub const MAIN: &str = concat!(
    "**🎬 Available Commands:**\n",
    "\n",
    "1. **top [count] [year] [genre]:**\n",
    "   Get the top-rated movies.\n",
    "   - Example: `top 5 comedy 2015` (any combination)\n",
    "\n",
    "2. **random [count] [year] [genre]:**\n",
    "   Get a random selection of well-rated movies.\n",
    "   - Example: `random 3 horror` (any combination)\n",
    "\n",
    "3. **trending [count] [year] [genre]:**\n",
    "   Get the movies trending today.\n",
    "   - Example: `trending 10 sci-fi` (any combination)\n",
    "\n",
    "4. **movie [movie_name] [year]:**\n",
    "   Get information about a specific movie and five similar ones.\n",
    "   - Example: `movie Inception` or `movie Dune 2021`\n",
    "\n",
    "5. **watchlist [create | add | remove | watched | 1-10 | see | delete]:**\n",
    "   - `watchlist create`: start a watchlist\n",
    "   - `watchlist add <movie> [year]`: add a movie to watch\n",
    "   - `watchlist watched <movie> <year>`: move it to your watched list\n",
    "   - `watchlist <1-10> <movie> <year>`: rate a watched movie\n",
    "   - `watchlist remove <movie> <year>`: remove a movie from either list\n",
    "   - `watchlist see`: show both lists\n",
    "   - `watchlist delete`: delete your watchlist\n",
    "   - use `unknown` as the year for a movie listed without one\n",
    "\n",
    "Genres: action, adventure, animation, comedy, crime, drama, documentary, family, ",
    "history, music, fantasy, war, western, horror, mystery, romance, sci-fi, thriller\n"
);
