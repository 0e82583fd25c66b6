mod greeting;
