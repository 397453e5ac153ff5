//! Built-in package catalog, grouped by category.

pub(super) struct Entry {
    pub name: &'static str,
    pub description: &'static str,
    pub doc_url: &'static str,
}

const fn e(name: &'static str, description: &'static str, doc_url: &'static str) -> Entry {
    Entry {
        name,
        description,
        doc_url,
    }
}

pub(super) const CATEGORIES: &[(&str, &[Entry])] = &[
    (
        "Frontend",
        &[
            e("Tkinter", "Builtin GUI Toolkit", "https://docs.python.org/3/library/tkinter.html"),
            e(
                "PyQt5",
                "Python-Bindings für Qt5",
                "https://www.riverbankcomputing.com/static/Docs/PyQt5/",
            ),
            e("PySide2", "Offizielle Qt-Bindings", "https://doc.qt.io/qtforpython/"),
            e("Kivy", "Framework für Multi-Touch UIs", "https://kivy.org/doc/stable/"),
            e(
                "wxPython",
                "Native GUI (Wrapper für wxWidgets)",
                "https://wxpython.org/Phoenix/docs/html/",
            ),
            e("PySimpleGUI", "Einfacher GUI Wrapper", "https://pysimplegui.readthedocs.io/"),
            e("DearPyGui", "GPU-beschleunigte GUI", "https://dearpygui.readthedocs.io/en/latest/"),
            e("Toga", "Native GUI für BeeWare", "https://toga.readthedocs.io/en/latest/"),
            e("PyGame", "Game- und Multimedia-Framework", "https://www.pygame.org/docs/"),
            e(
                "CustomTkinter",
                "Modern UI elements for tkinter",
                "https://github.com/TomSchimansky/CustomTkinter",
            ),
            e("ttkbootstrap", "Themed tkinter widgets", "https://ttkbootstrap.readthedocs.io/"),
            e("Flexx", "Pure Python UI toolkit", "https://flexx.readthedocs.io/"),
            e("PySide6", "Qt for Python (official)", "https://doc.qt.io/qtforpython/"),
            e("PyGObject", "GTK+ 3 bindings for Python", "https://pygobject.readthedocs.io/"),
            e("Eel", "HTML/JS GUI für Python", "https://github.com/ChrisKnott/Eel"),
        ],
    ),
    (
        "Backend",
        &[
            e("Django", "High-Level Webframework", "https://docs.djangoproject.com/en/stable/"),
            e("Flask", "Lightweight web framework", "https://flask.palletsprojects.com/"),
            e("FastAPI", "Modern, fast web framework", "https://fastapi.tiangolo.com/"),
            e("Tornado", "Asynchronous networking library", "https://www.tornadoweb.org/"),
            e("Pyramid", "Flexible web framework", "https://trypyramid.com/"),
            e("Sanic", "Async web framework", "https://sanic.readthedocs.io/"),
            e("Falcon", "API framework for building microservices", "https://falconframework.org/"),
            e("aiohttp", "Async HTTP client/server", "https://docs.aiohttp.org/"),
            e("Bottle", "Simple WSGI web framework", "https://bottlepy.org/"),
            e("CherryPy", "Object-oriented web framework", "https://cherrypy.org/"),
            e("Quart", "Asynchrones Flask", "https://pgjones.gitlab.io/quart/"),
            e("Starlette", "Lightweight ASGI framework", "https://www.starlette.io/"),
            e(
                "Responder",
                "Familiar HTTP Service Framework",
                "https://github.com/taoufik07/responder",
            ),
            e(
                "Masonite",
                "Developer-centric Python web framework",
                "https://docs.masoniteproject.com/",
            ),
            e("TurboGears", "Web framework with best library approach", "https://turbogears.org/"),
        ],
    ),
    (
        "Web",
        &[
            e("requests", "HTTP library", "https://requests.readthedocs.io/"),
            e(
                "Beautiful Soup",
                "HTML/XML parser",
                "https://www.crummy.com/software/BeautifulSoup/",
            ),
            e("Selenium", "Browser automation", "https://selenium-python.readthedocs.io/"),
            e("httpx", "Next-gen HTTP client", "https://www.python-httpx.org/"),
            e("Scrapy", "Web crawling framework", "https://scrapy.org/"),
            e("lxml", "XML and HTML processing", "https://lxml.de/"),
            e("urllib3", "HTTP client", "https://urllib3.readthedocs.io/"),
            e("html5lib", "Standards-compliant HTML parser", "https://html5lib.readthedocs.io/"),
            e(
                "MechanicalSoup",
                "Automate interaction with websites",
                "https://mechanicalsoup.readthedocs.io/",
            ),
            e("pyppeteer", "Puppeteer Python port", "https://pyppeteer.github.io/pyppeteer/"),
            e("playwright", "Browser automation", "https://playwright.dev/python/"),
            e("parsel", "HTML/XML data extraction library", "https://parsel.readthedocs.io/"),
            e("Werkzeug", "WSGI web application library", "https://werkzeug.palletsprojects.com/"),
            e("uvicorn", "ASGI web server", "https://www.uvicorn.org/"),
            e("gunicorn", "WSGI HTTP Server", "https://gunicorn.org/"),
        ],
    ),
    (
        "Tooling",
        &[
            e("pytest", "Testing framework", "https://docs.pytest.org/"),
            e("tox", "Automate testing", "https://tox.readthedocs.io/"),
            e("black", "Code formatter", "https://black.readthedocs.io/"),
            e("flake8", "Linting tool", "https://flake8.pycqa.org/"),
            e("mypy", "Static type checker", "https://mypy.readthedocs.io/"),
            e("pipenv", "Dependency management", "https://pipenv.pypa.io/"),
            e("poetry", "Dependency management", "https://python-poetry.org/"),
            e("isort", "Import sorter", "https://pycqa.github.io/isort/"),
            e("bandit", "Security linter", "https://bandit.readthedocs.io/"),
            e("pre-commit", "Git hooks framework", "https://pre-commit.com/"),
            e("pylint", "Code analysis for bug detection", "https://pylint.pycqa.org/"),
            e("virtualenv", "Virtual environment creation", "https://virtualenv.pypa.io/"),
            e(
                "pyright",
                "Static type checker by Microsoft",
                "https://github.com/microsoft/pyright",
            ),
            e("ruff", "Fast Python linter", "https://github.com/charliermarsh/ruff"),
            e(
                "pydantic",
                "Data validation using type annotations",
                "https://pydantic-docs.helpmanual.io/",
            ),
        ],
    ),
    (
        "Database",
        &[
            e("SQLAlchemy", "SQL toolkit and ORM", "https://www.sqlalchemy.org/"),
            e("peewee", "Small ORM", "http://docs.peewee-orm.com/"),
            e("pymongo", "MongoDB driver", "https://pymongo.readthedocs.io/"),
            e("psycopg2", "PostgreSQL adapter", "https://www.psycopg.org/"),
            e(
                "mysql-connector-python",
                "MySQL driver",
                "https://dev.mysql.com/doc/connector-python/en/",
            ),
            e("redis-py", "Redis client", "https://redis-py.readthedocs.io/"),
            e("tortoise-orm", "Async ORM", "https://tortoise-orm.readthedocs.io/"),
            e("dataset", "Database for lazy people", "https://dataset.readthedocs.io/"),
            e("mongoengine", "MongoDB ODM", "https://mongoengine-odm.readthedocs.io/"),
            e("pony", "ORM with query syntax", "https://ponyorm.org/"),
            e(
                "sqlite3",
                "SQLite database interface",
                "https://docs.python.org/3/library/sqlite3.html",
            ),
            e("aiomysql", "Asyncio MySQL driver", "https://aiomysql.readthedocs.io/"),
            e("asyncpg", "Asyncio PostgreSQL driver", "https://magicstack.github.io/asyncpg/"),
            e("aiosqlite", "Asyncio SQLite driver", "https://github.com/omnilib/aiosqlite"),
            e("sqlmodel", "SQLAlchemy + Pydantic", "https://sqlmodel.tiangolo.com/"),
        ],
    ),
    (
        "Big Data",
        &[
            e("pandas", "Data analysis and manipulation", "https://pandas.pydata.org/"),
            e("numpy", "Numerical computing", "https://numpy.org/"),
            e(
                "pyspark",
                "Apache Spark interface",
                "https://spark.apache.org/docs/latest/api/python/",
            ),
            e("dask", "Parallel computing", "https://dask.org/"),
            e("vaex", "Out-of-memory dataframes", "https://vaex.io/"),
            e("polars", "Fast DataFrame library", "https://pola.rs/"),
            e("modin", "Accelerated pandas", "https://modin.readthedocs.io/"),
            e("koalas", "Pandas API on Apache Spark", "https://koalas.readthedocs.io/"),
            e(
                "petastorm",
                "Parquet datasets with ML frameworks",
                "https://petastorm.readthedocs.io/",
            ),
            e("ray", "Distributed computing", "https://ray.io/"),
            e("xarray", "N-D labeled arrays and datasets", "https://xarray.pydata.org/"),
            e("pyarrow", "Apache Arrow and Parquet", "https://arrow.apache.org/docs/python/"),
            e("cudf", "GPU DataFrame library", "https://docs.rapids.ai/api/cudf/stable/"),
            e("h5py", "Interface to HDF5 format", "https://www.h5py.org/"),
            e("datatable", "Data table processing library", "https://datatable.readthedocs.io/"),
        ],
    ),
    (
        "IoT",
        &[
            e("paho-mqtt", "MQTT client", "https://pypi.org/project/paho-mqtt/"),
            e("micropython", "Python for microcontrollers", "https://micropython.org/"),
            e("adafruit-circuitpython", "CircuitPython libraries", "https://circuitpython.org/"),
            e("gpiozero", "Simple Raspberry Pi GPIO", "https://gpiozero.readthedocs.io/"),
            e("RPi.GPIO", "Raspberry Pi GPIO module", "https://pypi.org/project/RPi.GPIO/"),
            e("pyserial", "Serial port access", "https://pyserial.readthedocs.io/"),
            e("bleak", "Bluetooth Low Energy", "https://bleak.readthedocs.io/"),
            e("esptool", "ESP8266/ESP32 tool", "https://github.com/espressif/esptool"),
            e("pymodbus", "Modbus protocol implementation", "https://pymodbus.readthedocs.io/"),
            e("pybluez", "Bluetooth Python extension", "https://pybluez.github.io/"),
            e("pigpio", "Raspberry Pi GPIO control", "http://abyz.me.uk/rpi/pigpio/python.html"),
            e(
                "python-periphery",
                "Linux peripheral I/O",
                "https://python-periphery.readthedocs.io/",
            ),
            e("Pillow", "Image processing library", "https://python-pillow.org/"),
            e("smbus2", "SMBus protocol", "https://github.com/kplindegaard/smbus2"),
            e("rpi-gpio-nfc", "NFC on Raspberry Pi", "https://github.com/StrayFeral/rpi-gpio-nfc"),
        ],
    ),
    (
        "DevOps",
        &[
            e("ansible", "Automation platform", "https://www.ansible.com/"),
            e("docker", "Docker API client", "https://docker-py.readthedocs.io/"),
            e("fabric", "SSH deployment tool", "https://www.fabfile.org/"),
            e("paramiko", "SSH implementation", "https://www.paramiko.org/"),
            e("kubernetes", "Kubernetes API client", "https://github.com/kubernetes-client/python"),
            e(
                "boto3",
                "AWS SDK",
                "https://boto3.amazonaws.com/v1/documentation/api/latest/index.html",
            ),
            e(
                "terraform-python",
                "Terraform wrapper",
                "https://github.com/beelit94/terraform-python",
            ),
            e("pulumi", "Infrastructure as Code", "https://www.pulumi.com/"),
            e("python-jenkins", "Jenkins API client", "https://python-jenkins.readthedocs.io/"),
            e("salt", "Remote execution framework", "https://docs.saltproject.io/"),
            e("azure-cli", "Azure command-line interface", "https://docs.microsoft.com/cli/azure/"),
            e(
                "google-cloud-python",
                "Google Cloud client",
                "https://googleapis.dev/python/google-api-core/latest/index.html",
            ),
            e(
                "python-digitalocean",
                "DigitalOcean API",
                "https://github.com/koalalorenzo/python-digitalocean",
            ),
            e("openstack", "OpenStack SDK", "https://docs.openstack.org/openstacksdk/latest/"),
            e("jenkinsapi", "Jenkins API", "https://github.com/pycontribs/jenkinsapi"),
        ],
    ),
    (
        "Media",
        &[
            e("Pillow", "Image processing", "https://pillow.readthedocs.io/"),
            e("moviepy", "Video editing", "https://zulko.github.io/moviepy/"),
            e("pygame", "Game development", "https://www.pygame.org/"),
            e("opencv-python", "Computer vision", "https://opencv.org/"),
            e("pydub", "Audio processing", "https://github.com/jiaaro/pydub"),
            e("pyglet", "Windowing and multimedia", "https://pyglet.org/"),
            e("librosa", "Audio analysis", "https://librosa.org/"),
            e("mutagen", "Audio metadata handling", "https://mutagen.readthedocs.io/"),
            e("ffmpeg-python", "FFmpeg wrapper", "https://github.com/kkroening/ffmpeg-python"),
            e("pyaudio", "Audio I/O", "https://people.csail.mit.edu/hubert/pyaudio/"),
            e("imageio", "Image I/O", "https://imageio.github.io/"),
            e("scikit-image", "Image processing", "https://scikit-image.org/"),
            e("manim", "Mathematical animations", "https://docs.manim.community/"),
            e("wand", "ImageMagick binding", "https://docs.wand-py.org/"),
            e("python-vlc", "VLC media player binding", "https://github.com/oaubert/python-vlc"),
        ],
    ),
    (
        "Parse",
        &[
            e("pyyaml", "YAML parser and emitter", "https://pyyaml.org/"),
            e("json", "JSON encoder and decoder", "https://docs.python.org/3/library/json.html"),
            e("csv", "CSV file reading and writing", "https://docs.python.org/3/library/csv.html"),
            e(
                "xml.etree.ElementTree",
                "XML processing",
                "https://docs.python.org/3/library/xml.etree.elementtree.html",
            ),
            e(
                "configparser",
                "INI file parser",
                "https://docs.python.org/3/library/configparser.html",
            ),
            e("toml", "TOML parser", "https://github.com/toml-lang/toml"),
            e(
                "ujson",
                "Ultra fast JSON encoder and decoder",
                "https://github.com/ultrajson/ultrajson",
            ),
            e(
                "python-dateutil",
                "Date parsing and manipulation",
                "https://dateutil.readthedocs.io/",
            ),
            e("xmltodict", "XML to dict converter", "https://github.com/martinblech/xmltodict"),
            e("arrow", "Better dates and times", "https://arrow.readthedocs.io/"),
            e(
                "parse",
                "Parse strings using format strings",
                "https://github.com/r1chardj0n3s/parse",
            ),
            e(
                "beautifulsoup4",
                "HTML/XML parser",
                "https://www.crummy.com/software/BeautifulSoup/",
            ),
            e("pyparsing", "Parser generator", "https://pyparsing-docs.readthedocs.io/"),
            e(
                "marshmallow",
                "Object serialization/deserialization",
                "https://marshmallow.readthedocs.io/",
            ),
            e("tomli", "TOML parser (Python 3.6+)", "https://github.com/hukkin/tomli"),
        ],
    ),
    (
        "Security",
        &[
            e("cryptography", "Cryptographic recipes", "https://cryptography.io/"),
            e("passlib", "Password hashing", "https://passlib.readthedocs.io/"),
            e("pyOpenSSL", "OpenSSL wrapper", "https://pyopenssl.org/"),
            e("jwt", "JSON Web Token", "https://pyjwt.readthedocs.io/"),
            e("oauthlib", "OAuth implementation", "https://oauthlib.readthedocs.io/"),
            e("bcrypt", "Modern password hashing", "https://github.com/pyca/bcrypt/"),
            e("paramiko", "SSHv2 protocol", "https://www.paramiko.org/"),
            e("pyotp", "One-time password library", "https://github.com/pyauth/pyotp"),
            e("authlib", "Authentication library", "https://docs.authlib.org/"),
            e("google-auth", "Google Authentication", "https://google-auth.readthedocs.io/"),
            e("pynacl", "Networking and cryptography library", "https://pynacl.readthedocs.io/"),
            e("python-gnupg", "GnuPG interface", "https://gnupg.readthedocs.io/"),
            e("py-argon2", "Argon2 password hashing", "https://argon2-cffi.readthedocs.io/"),
            e(
                "itsdangerous",
                "Cryptographically sign data",
                "https://itsdangerous.palletsprojects.com/",
            ),
            e("pyca", "Python Cryptographic Authority", "https://github.com/pyca"),
        ],
    ),
    (
        "APIs",
        &[
            e(
                "requests-oauthlib",
                "OAuth for Requests",
                "https://requests-oauthlib.readthedocs.io/",
            ),
            e("python-twitter", "Twitter API", "https://github.com/bear/python-twitter"),
            e("tweepy", "Twitter API client", "https://www.tweepy.org/"),
            e(
                "google-api-python-client",
                "Google APIs client",
                "https://github.com/googleapis/google-api-python-client",
            ),
            e("facebook-sdk", "Facebook SDK", "https://facebook-sdk.readthedocs.io/"),
            e(
                "instagram-private-api",
                "Instagram Private API",
                "https://github.com/ping/instagram_private_api",
            ),
            e("praw", "Reddit API wrapper", "https://praw.readthedocs.io/"),
            e("stripe", "Stripe API", "https://stripe.com/docs/api?lang=python"),
            e("twilio", "Twilio API client", "https://www.twilio.com/docs/libraries/python"),
            e("github3.py", "GitHub API client", "https://github3py.readthedocs.io/"),
            e(
                "pyTelegramBotAPI",
                "Telegram Bot API",
                "https://github.com/eternnoir/pyTelegramBotAPI",
            ),
            e("python-gitlab", "GitLab API client", "https://python-gitlab.readthedocs.io/"),
            e("discord.py", "Discord API client", "https://discordpy.readthedocs.io/"),
            e("slackclient", "Slack API client", "https://slack.dev/python-slackclient/"),
            e("pyOpenWeatherMap", "OpenWeatherMap API", "https://github.com/csparpa/pyowm"),
        ],
    ),
    (
        "Compression",
        &[
            e("zipfile", "ZIP archive handling", "https://docs.python.org/3/library/zipfile.html"),
            e("tarfile", "TAR archive handling", "https://docs.python.org/3/library/tarfile.html"),
            e("gzip", "Gzip support", "https://docs.python.org/3/library/gzip.html"),
            e("bz2", "Bzip2 compression", "https://docs.python.org/3/library/bz2.html"),
            e("lzma", "LZMA compression", "https://docs.python.org/3/library/lzma.html"),
            e("zlib", "Zlib compression", "https://docs.python.org/3/library/zlib.html"),
            e("py7zr", "7zip archive handling", "https://py7zr.readthedocs.io/"),
            e(
                "pyzipper",
                "Extended zipfile with encryption",
                "https://github.com/danifus/pyzipper",
            ),
            e(
                "compress-pickle",
                "Compressed pickle serialization",
                "https://github.com/lucianopaz/compress_pickle",
            ),
            e("unrar", "RAR archive handling", "https://github.com/matiasb/python-unrar"),
            e("zstandard", "Zstandard compression", "https://python-zstandard.readthedocs.io/"),
            e("lz4", "LZ4 compression", "https://python-lz4.readthedocs.io/"),
            e("brotli", "Brotli compression", "https://github.com/google/brotli"),
            e("snappy", "Snappy compression", "https://github.com/andrix/python-snappy"),
            e("blosc", "Blosc compression", "https://github.com/Blosc/python-blosc"),
        ],
    ),
    (
        "Machine Learning",
        &[
            e("scikit-learn", "Machine learning algorithms", "https://scikit-learn.org/"),
            e("tensorflow", "Deep learning framework", "https://www.tensorflow.org/"),
            e("pytorch", "Deep learning framework", "https://pytorch.org/"),
            e("keras", "High-level neural networks API", "https://keras.io/"),
            e("xgboost", "Gradient boosting framework", "https://xgboost.readthedocs.io/"),
            e("lightgbm", "Gradient boosting framework", "https://lightgbm.readthedocs.io/"),
            e("catboost", "Gradient boosting framework", "https://catboost.ai/"),
            e("spacy", "Natural language processing", "https://spacy.io/"),
            e("nltk", "Natural language toolkit", "https://www.nltk.org/"),
            e(
                "gensim",
                "Topic modeling and document similarity",
                "https://radimrehurek.com/gensim/",
            ),
            e("transformers", "Hugging Face Transformers", "https://huggingface.co/transformers/"),
            e("fastai", "Deep learning library", "https://docs.fast.ai/"),
            e("scikit-image", "Image processing", "https://scikit-image.org/"),
            e("statsmodels", "Statistical models", "https://www.statsmodels.org/"),
            e("opencv-python", "Computer vision", "https://opencv.org/"),
        ],
    ),
    (
        "Visualization",
        &[
            e("matplotlib", "Plotting library", "https://matplotlib.org/"),
            e("seaborn", "Statistical data visualization", "https://seaborn.pydata.org/"),
            e("plotly", "Interactive plots", "https://plotly.com/python/"),
            e("bokeh", "Interactive web plots", "https://bokeh.org/"),
            e("altair", "Declarative statistical visualization", "https://altair-viz.github.io/"),
            e("holoviews", "Data visualization library", "https://holoviews.org/"),
            e("dash", "Interactive web apps for visualization", "https://dash.plotly.com/"),
            e("pygal", "SVG charts creator", "http://pygal.org/"),
            e("folium", "Leaflet.js maps", "https://python-visualization.github.io/folium/"),
            e("ggplot", "ggplot2 port to Python", "https://github.com/yhat/ggpy"),
            e("plotnine", "Grammar of graphics", "https://plotnine.readthedocs.io/"),
            e("networkx", "Network graphs", "https://networkx.org/"),
            e("pydot", "Graphviz interface", "https://github.com/pydot/pydot"),
            e("graphviz", "Graphviz interface", "https://graphviz.readthedocs.io/"),
            e("datashader", "Big data visualization", "https://datashader.org/"),
        ],
    ),
    (
        "Testing",
        &[
            e("pytest", "Testing framework", "https://docs.pytest.org/"),
            e(
                "unittest",
                "Unit testing framework",
                "https://docs.python.org/3/library/unittest.html",
            ),
            e("nose2", "Test runner", "https://docs.nose2.io/"),
            e(
                "mock",
                "Mocking and testing library",
                "https://docs.python.org/3/library/unittest.mock.html",
            ),
            e(
                "pytest-cov",
                "Code coverage plugin for pytest",
                "https://pytest-cov.readthedocs.io/",
            ),
            e("selenium", "Browser automation", "https://selenium-python.readthedocs.io/"),
            e("behave", "BDD testing", "https://behave.readthedocs.io/"),
            e("hypothesis", "Property-based testing", "https://hypothesis.readthedocs.io/"),
            e("robotframework", "Generic test automation", "https://robotframework.org/"),
            e("playwright", "Browser automation", "https://playwright.dev/python/"),
            e(
                "pytest-mock",
                "Thin wrapper around mock",
                "https://github.com/pytest-dev/pytest-mock/",
            ),
            e("pytest-xdist", "Test parallelization", "https://github.com/pytest-dev/pytest-xdist"),
            e(
                "pytest-django",
                "Django testing with pytest",
                "https://pytest-django.readthedocs.io/",
            ),
            e(
                "pytest-asyncio",
                "Asyncio testing with pytest",
                "https://github.com/pytest-dev/pytest-asyncio",
            ),
            e("faker", "Fake data generator", "https://faker.readthedocs.io/"),
        ],
    ),
];
