//! Word lists backing [`super::lorem::LoremSource`].

pub(crate) const LOREM_WORDS: &[&str] = &[
    "a", "ab", "accusamus", "accusantium", "ad", "adipisci", "alias", "aliquam", "aliquid",
    "amet", "animi", "aperiam", "architecto", "asperiores", "aspernatur", "assumenda", "at",
    "atque", "aut", "autem", "beatae", "blanditiis", "commodi", "consectetur", "consequatur",
    "consequuntur", "corporis", "corrupti", "culpa", "cum", "cumque", "cupiditate", "debitis",
    "delectus", "deleniti", "deserunt", "dicta", "dignissimos", "distinctio", "dolor",
    "dolore", "dolorem", "doloremque", "dolores", "doloribus", "dolorum", "ducimus", "ea",
    "eaque", "earum", "eius", "eligendi", "enim", "eos", "error", "esse", "est", "et", "eum",
    "eveniet", "ex", "excepturi", "exercitationem", "expedita", "explicabo", "facere",
    "facilis", "fuga", "fugiat", "fugit", "harum", "hic", "id", "illo", "illum", "impedit",
    "in", "incidunt", "inventore", "ipsa", "ipsam", "ipsum", "iste", "itaque", "iure",
    "iusto", "labore", "laboriosam", "laborum", "laudantium", "libero", "magnam", "magni",
    "maiores", "maxime", "minima", "minus", "modi", "molestiae", "molestias", "mollitia",
    "nam", "natus", "necessitatibus", "nemo", "neque", "nesciunt", "nihil", "nisi", "nobis",
    "non", "nostrum", "nulla", "numquam", "obcaecati", "odio", "odit", "officia", "officiis",
    "omnis", "optio", "pariatur", "perferendis", "perspiciatis", "placeat", "porro",
    "possimus", "praesentium", "provident", "quae", "quaerat", "quam", "quas", "quasi", "qui",
    "quia", "quibusdam", "quidem", "quis", "quisquam", "quo", "quod", "quos", "ratione",
    "recusandae", "reiciendis", "rem", "repellat", "repellendus", "reprehenderit",
    "repudiandae", "rerum", "saepe", "sapiente", "sed", "sequi", "similique", "sint", "sit",
    "soluta", "sunt", "suscipit", "tempora", "tempore", "temporibus", "tenetur", "totam",
    "ullam", "unde", "ut", "vel", "velit", "veniam", "veritatis", "vero", "vitae",
    "voluptas", "voluptate", "voluptatem", "voluptates", "voluptatibus", "voluptatum",
];

pub(crate) const FIRST_NAMES: &[&str] = &[
    "Aaron", "Abigail", "Adam", "Alexis", "Alicia", "Amanda", "Andrew", "Angela", "Anthony",
    "Ashley", "Benjamin", "Brandon", "Brian", "Brittany", "Carlos", "Catherine", "Charles",
    "Christina", "Christopher", "Daniel", "David", "Deborah", "Diana", "Donald", "Elizabeth",
    "Emily", "Eric", "Frank", "Gabriel", "Gregory", "Hannah", "Heather", "Isaac", "Jacob",
    "James", "Jason", "Jennifer", "Jessica", "John", "Jonathan", "Joseph", "Julia", "Karen",
    "Katherine", "Kevin", "Laura", "Linda", "Lisa", "Maria", "Mark", "Matthew", "Megan",
    "Melissa", "Michael", "Michelle", "Nancy", "Nicholas", "Nicole", "Patricia", "Paul",
    "Rachel", "Rebecca", "Richard", "Robert", "Ryan", "Samantha", "Sarah", "Scott",
    "Stephanie", "Steven", "Susan", "Thomas", "Timothy", "Victoria", "William", "Zachary",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Adams", "Allen", "Anderson", "Baker", "Bennett", "Brooks", "Brown", "Campbell",
    "Carter", "Clark", "Collins", "Cook", "Cooper", "Davis", "Edwards", "Evans", "Fisher",
    "Flores", "Garcia", "Gonzalez", "Gray", "Green", "Hall", "Harris", "Hernandez", "Hill",
    "Howard", "Hughes", "Jackson", "James", "Johnson", "Jones", "Kelly", "King", "Lee",
    "Lewis", "Lopez", "Martin", "Martinez", "Miller", "Mitchell", "Moore", "Morgan",
    "Morris", "Murphy", "Nelson", "Nguyen", "Parker", "Perez", "Peterson", "Phillips",
    "Price", "Ramirez", "Reed", "Richardson", "Rivera", "Roberts", "Robinson", "Rodriguez",
    "Rogers", "Ross", "Sanchez", "Scott", "Smith", "Stewart", "Taylor", "Thomas",
    "Thompson", "Torres", "Turner", "Walker", "Ward", "Watson", "White", "Williams",
    "Wilson", "Wood", "Wright", "Young",
];
